use super::Cell;

/// Trait for neighbor-counting transition rules.
/// Shared by Conway's Life and the boolean automata.
pub trait Rule: Send + Sync {
    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current.is_alive(), neighbors) {
            (true, 2 | 3) => Cell::Alive,
            (false, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Boolean automaton rule: a cell is on next generation iff its live
/// neighbor count is one of the toggled thresholds, whatever its own state.
/// Bit `i` of the mask stands for a count of `i + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThresholdRule {
    mask: u8,
}

impl ThresholdRule {
    pub const fn new(mask: u8) -> Self {
        Self { mask }
    }
}

impl Rule for ThresholdRule {
    fn evolve(&self, _current: Cell, neighbors: u8) -> Cell {
        let on = (1..=8).contains(&neighbors) && (self.mask >> (neighbors - 1)) & 1 == 1;
        Cell::from_alive(on)
    }
}
