//! Error types for the automaton engine.

use super::{AutomatonKind, Neighborhood};
use thiserror::Error;

/// Errors reported when a configuration change or step request is rejected.
///
/// Every rejection leaves the engine exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Elementary rule numbers are 8-bit.
    #[error("rule number {0} is outside 0..=255")]
    RuleNumberOutOfRange(u32),

    /// Elementary rule tables have one entry per 3-cell pattern.
    #[error("rule table index {0} is outside 0..=7")]
    RuleIndexOutOfRange(usize),

    /// Threshold index does not exist for the neighborhood.
    #[error("threshold index {index} is invalid for the {neighborhood} neighborhood")]
    ThresholdIndexOutOfRange {
        neighborhood: Neighborhood,
        index: usize,
    },

    #[error("unknown neighborhood code {0}")]
    UnknownNeighborhood(u8),

    #[error("unknown initial state code {0}")]
    UnknownInitialState(u8),

    #[error("unknown automaton kind code {0}")]
    UnknownKind(u8),

    #[error("traffic density {0}% is outside 0..=100")]
    DensityOutOfRange(u8),

    #[error("ant brush size {0} is outside 1..={max}", max = crate::domain::MAX_ANT_NUM_PIXELS)]
    BrushSizeOutOfRange(usize),

    #[error("cyclic state count {0} is outside 2..={max}", max = crate::domain::MAX_CYCLIC_STATES)]
    StateCountOutOfRange(u8),

    /// `next_step` was called before `initialize` for the current kind.
    #[error("{0} has not been initialized")]
    NotInitialized(AutomatonKind),
}

pub type Result<T> = std::result::Result<T, EngineError>;
