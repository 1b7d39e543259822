//! Runtime configuration for the viewer and the benchmark.

use crate::domain::StepStrategy;
use log::warn;
use std::str::FromStr;

/// Simulation settings that are fixed for the lifetime of a session.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    /// Steps per second while running
    pub steps_per_second: f32,
    /// Seed for every random draw; `None` picks one at startup
    pub seed: Option<u64>,
    pub strategy: StepStrategy,
    /// On-screen size of one cell, in pixels
    pub cell_pixels: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 192,
            steps_per_second: 30.0,
            seed: None,
            strategy: StepStrategy::Parallel,
            cell_pixels: 3.0,
        }
    }
}

impl SimConfig {
    /// Defaults overlaid with `CA_WIDTH`, `CA_HEIGHT`, `CA_SEED`, `CA_SPEED`
    /// and `CA_SERIAL` from the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SimConfig::from_env`] with an arbitrary variable source.
    /// Values that do not parse are logged and skipped.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(width) = parse_var::<usize>(&lookup, "CA_WIDTH").filter(|&w| w > 0) {
            config.width = width;
        }
        if let Some(height) = parse_var::<usize>(&lookup, "CA_HEIGHT").filter(|&h| h > 0) {
            config.height = height;
        }
        if let Some(seed) = parse_var::<u64>(&lookup, "CA_SEED") {
            config.seed = Some(seed);
        }
        if let Some(speed) = parse_var::<f32>(&lookup, "CA_SPEED").filter(|s| *s > 0.0) {
            config.steps_per_second = speed;
        }
        if let Some(serial) = parse_var::<bool>(&lookup, "CA_SERIAL") {
            config.strategy = if serial {
                StepStrategy::Serial
            } else {
                StepStrategy::Parallel
            };
        }
        config
    }

    /// The configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> SimConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SimConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!((config.width, config.height), (256, 192));
        assert_eq!(config.strategy, StepStrategy::Parallel);
        assert_eq!(config.seed, None);
        assert_eq!(config_from(&[]), config);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CA_WIDTH", "64"),
            ("CA_HEIGHT", " 48 "),
            ("CA_SEED", "7"),
            ("CA_SPEED", "12.5"),
            ("CA_SERIAL", "true"),
        ]);
        assert_eq!((config.width, config.height), (64, 48));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.steps_per_second, 12.5);
        assert_eq!(config.strategy, StepStrategy::Serial);
        assert_eq!(config.resolve_seed(), 7);
    }

    #[test]
    fn test_bad_values_are_ignored() {
        let config = config_from(&[("CA_WIDTH", "wide"), ("CA_HEIGHT", "0"), ("CA_SPEED", "-3")]);
        assert_eq!(config, SimConfig::default());
    }
}
