mod cell;
mod engine;
mod error;
mod grid;
mod kind;
mod lattice;
mod patterns;
mod rule_codec;
mod rules;
mod surface;
pub mod automata;

pub use automata::{Automaton, AutomatonState, InitialStateType, Step};
pub use cell::Cell;
pub use engine::{
    CellularAutomata, DEFAULT_ANT_NUM_PIXELS, DEFAULT_BML_DENSITY, MAX_ANT_NUM_PIXELS,
    MAX_CYCLIC_STATES, MIN_CYCLIC_STATES, Settings,
};
pub use error::{EngineError, Result};
pub use grid::Grid;
pub use kind::AutomatonKind;
pub use lattice::{Lattice, is_up_triangle};
pub use patterns::{Layout, Pattern, Seed, presets};
pub use rule_codec::{BooleanRuleSet, ElementaryRule, Neighborhood, RULE_TABLE_LEN};
pub use rules::{ConwayRule, Rule, ThresholdRule};
pub use surface::{Buffer, StepStrategy, Surface};
