//! Per-kind automaton state and transition functions.
//!
//! Every kind implements [`Automaton`]; [`AutomatonState`] is the sum type
//! the engine holds, one variant per kind, each carrying only its own state.

mod ant;
mod bml;
mod boolean;
mod cyclic;
mod elementary;
mod life;
mod munching;

pub use ant::{HexAnt, HexHeading, Heading, SquareAnt};
pub use bml::{BmlTraffic, Orientation};
pub use boolean::BooleanAutomaton;
pub use cyclic::CyclicAutomaton;
pub use elementary::{ElementaryAutomaton, InitialStateType};
pub use life::ConwayLife;
pub use munching::MunchingSquares;

use super::{AutomatonKind, Lattice, StepStrategy, Surface, engine::Settings};
use rand::rngs::StdRng;

/// Outcome of one step request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The automaton moved on to its next state
    Advanced { population: usize },
    /// Nothing happened: the automaton has finished
    Halted,
}

/// Common interface of every automaton kind.
pub trait Automaton {
    /// Reset kind state and draw the initial configuration.
    /// Returns the initial population.
    fn initialize(&mut self, surface: &mut Surface, rng: &mut StdRng) -> usize;

    /// Perform one transition
    fn step(&mut self, surface: &mut Surface, strategy: StepStrategy) -> Step;

    fn has_finished(&self) -> bool {
        false
    }
}

pub enum AutomatonState {
    Elementary(ElementaryAutomaton),
    Ant(SquareAnt),
    HexAnt(HexAnt),
    Boolean(BooleanAutomaton),
    Life(ConwayLife),
    Munching(MunchingSquares),
    Bml(BmlTraffic),
    Cyclic(CyclicAutomaton),
}

impl AutomatonState {
    /// Fresh state for a kind, capturing the current settings
    pub fn for_kind(kind: AutomatonKind, settings: &Settings) -> Self {
        match kind {
            AutomatonKind::ElementaryCA => Self::Elementary(ElementaryAutomaton::new(
                settings.elementary_rule,
                settings.initial_state,
            )),
            AutomatonKind::LangtonAnt => Self::Ant(SquareAnt::new(settings.ant_num_pixels)),
            AutomatonKind::LangtonHexAnt => Self::HexAnt(HexAnt::new()),
            AutomatonKind::BooleanSquare => Self::Boolean(BooleanAutomaton::new(
                Lattice::Square,
                settings.neighborhood,
                &settings.boolean_rules,
            )),
            AutomatonKind::BooleanHex => Self::Boolean(BooleanAutomaton::new(
                Lattice::Hexagonal,
                settings.neighborhood,
                &settings.boolean_rules,
            )),
            AutomatonKind::BooleanTriangular => Self::Boolean(BooleanAutomaton::new(
                Lattice::Triangular,
                settings.neighborhood,
                &settings.boolean_rules,
            )),
            AutomatonKind::ConwayLife => Self::Life(ConwayLife::new()),
            AutomatonKind::MunchingSquares => Self::Munching(MunchingSquares::new()),
            AutomatonKind::BmlTraffic => Self::Bml(BmlTraffic::new(settings.bml_density)),
            AutomatonKind::CyclicCA => Self::Cyclic(CyclicAutomaton::new(settings.num_states)),
        }
    }

    fn inner(&self) -> &dyn Automaton {
        match self {
            Self::Elementary(a) => a,
            Self::Ant(a) => a,
            Self::HexAnt(a) => a,
            Self::Boolean(a) => a,
            Self::Life(a) => a,
            Self::Munching(a) => a,
            Self::Bml(a) => a,
            Self::Cyclic(a) => a,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Automaton {
        match self {
            Self::Elementary(a) => a,
            Self::Ant(a) => a,
            Self::HexAnt(a) => a,
            Self::Boolean(a) => a,
            Self::Life(a) => a,
            Self::Munching(a) => a,
            Self::Bml(a) => a,
            Self::Cyclic(a) => a,
        }
    }
}

impl Automaton for AutomatonState {
    fn initialize(&mut self, surface: &mut Surface, rng: &mut StdRng) -> usize {
        self.inner_mut().initialize(surface, rng)
    }

    fn step(&mut self, surface: &mut Surface, strategy: StepStrategy) -> Step {
        self.inner_mut().step(surface, strategy)
    }

    fn has_finished(&self) -> bool {
        self.inner().has_finished()
    }
}
