// Domain layer - automata, surface and engine
pub mod domain;

// Application layer - session driving the engine
pub mod application;

pub mod config;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{AutomatonKind, CellularAutomata, Cell, EngineError, Grid, Pattern, Step, Surface, presets};
pub use application::Session;
pub use config::SimConfig;
