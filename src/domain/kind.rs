//! The automaton kinds the engine can run.

use super::{EngineError, Lattice};
use std::fmt;

/// Every automaton the engine can run. Each kind has its own state model and
/// transition function; switching kinds discards the previous kind's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AutomatonKind {
    /// 1D rule automaton traced row by row
    #[default]
    ElementaryCA,
    /// Langton's ant on the square lattice
    LangtonAnt,
    /// Langton's ant on the hexagonal lattice
    LangtonHexAnt,
    /// Threshold automaton, square lattice
    BooleanSquare,
    /// Threshold automaton, hexagonal lattice
    BooleanHex,
    /// Threshold automaton, triangular lattice
    BooleanTriangular,
    /// Conway's Game of Life
    ConwayLife,
    /// XOR pattern redrawn each step
    MunchingSquares,
    /// Biham-Middleton-Levine traffic
    BmlTraffic,
    /// Cyclic cellular automaton
    CyclicCA,
}

impl AutomatonKind {
    /// Get all kinds in menu order
    pub fn all() -> Vec<AutomatonKind> {
        vec![
            AutomatonKind::ElementaryCA,
            AutomatonKind::LangtonAnt,
            AutomatonKind::LangtonHexAnt,
            AutomatonKind::BooleanSquare,
            AutomatonKind::BooleanHex,
            AutomatonKind::BooleanTriangular,
            AutomatonKind::ConwayLife,
            AutomatonKind::MunchingSquares,
            AutomatonKind::BmlTraffic,
            AutomatonKind::CyclicCA,
        ]
    }

    /// Display name for the status panel
    pub fn name(&self) -> &'static str {
        match self {
            AutomatonKind::ElementaryCA => "Elementary CA",
            AutomatonKind::LangtonAnt => "Langton's ant",
            AutomatonKind::LangtonHexAnt => "Langton's hex ant",
            AutomatonKind::BooleanSquare => "Boolean (square)",
            AutomatonKind::BooleanHex => "Boolean (hexagonal)",
            AutomatonKind::BooleanTriangular => "Boolean (triangular)",
            AutomatonKind::ConwayLife => "Game of Life",
            AutomatonKind::MunchingSquares => "Munching squares",
            AutomatonKind::BmlTraffic => "BML traffic",
            AutomatonKind::CyclicCA => "Cyclic CA",
        }
    }

    /// Short description for the status panel
    pub fn description(&self) -> &'static str {
        match self {
            AutomatonKind::ElementaryCA => "8-entry rule, one row per generation",
            AutomatonKind::LangtonAnt => "Turn on color, flip, advance",
            AutomatonKind::LangtonHexAnt => "Six headings, one hex per move",
            AutomatonKind::BooleanSquare => "On iff neighbor count is toggled",
            AutomatonKind::BooleanHex => "Six neighbors on the Moore slots",
            AutomatonKind::BooleanTriangular => "Up/down triangles",
            AutomatonKind::ConwayLife => "B3/S23",
            AutomatonKind::MunchingSquares => "(x xor y) < t",
            AutomatonKind::BmlTraffic => "East and north cars take turns",
            AutomatonKind::CyclicCA => "Advance when a neighbor is ahead",
        }
    }

    /// Lattice the kind lives on
    pub fn lattice(&self) -> Lattice {
        match self {
            AutomatonKind::LangtonHexAnt | AutomatonKind::BooleanHex => Lattice::Hexagonal,
            AutomatonKind::BooleanTriangular => Lattice::Triangular,
            _ => Lattice::Square,
        }
    }
}

impl fmt::Display for AutomatonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for AutomatonKind {
    type Error = EngineError;

    /// Menu position to kind
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(code as usize)
            .copied()
            .ok_or(EngineError::UnknownKind(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_returns_ten() {
        assert_eq!(AutomatonKind::all().len(), 10);
    }

    #[test]
    fn test_default_is_elementary() {
        assert_eq!(AutomatonKind::default(), AutomatonKind::ElementaryCA);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = AutomatonKind::all().iter().map(|k| k.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_lattices() {
        assert_eq!(AutomatonKind::BooleanHex.lattice(), Lattice::Hexagonal);
        assert_eq!(AutomatonKind::LangtonHexAnt.lattice(), Lattice::Hexagonal);
        assert_eq!(AutomatonKind::BooleanTriangular.lattice(), Lattice::Triangular);
        assert_eq!(AutomatonKind::ConwayLife.lattice(), Lattice::Square);
    }

    #[test]
    fn test_codes() {
        assert_eq!(AutomatonKind::try_from(0), Ok(AutomatonKind::ElementaryCA));
        assert_eq!(AutomatonKind::try_from(9), Ok(AutomatonKind::CyclicCA));
        assert_eq!(AutomatonKind::try_from(10), Err(EngineError::UnknownKind(10)));
    }
}
