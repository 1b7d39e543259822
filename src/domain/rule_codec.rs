//! Rule encodings.
//!
//! An elementary rule is the 8-entry output table of a 1D automaton, packed
//! into a byte: bit `i` is the output for the neighborhood pattern
//! `i = left * 4 + center * 2 + right`, so the most significant bit belongs to
//! pattern `111`.
//!
//! A boolean rule set holds the neighbor counts that switch a cell on, one
//! bit per count, kept separately for the Von Neumann and Moore
//! neighborhoods.

use super::{EngineError, error::Result};
use std::fmt;

/// Number of 3-cell patterns in an elementary rule
pub const RULE_TABLE_LEN: usize = 8;

/// Output table of an elementary cellular automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementaryRule([bool; RULE_TABLE_LEN]);

impl ElementaryRule {
    /// Build a rule from its output table, indexed by pattern value
    pub const fn from_table(table: [bool; RULE_TABLE_LEN]) -> Self {
        Self(table)
    }

    /// Decode a rule number. Numbers above 255 are rejected.
    pub fn from_number(number: u32) -> Result<Self> {
        u8::try_from(number)
            .map(Self::from)
            .map_err(|_| EngineError::RuleNumberOutOfRange(number))
    }

    /// Pack the output table into the rule number
    pub fn number(&self) -> u8 {
        self.0
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &on)| acc | ((on as u8) << i))
    }

    pub const fn table(&self) -> [bool; RULE_TABLE_LEN] {
        self.0
    }

    /// Output for one pattern index
    pub fn output(&self, index: usize) -> Result<bool> {
        self.0
            .get(index)
            .copied()
            .ok_or(EngineError::RuleIndexOutOfRange(index))
    }

    pub fn set_output(&mut self, index: usize, on: bool) -> Result<()> {
        let slot = self
            .0
            .get_mut(index)
            .ok_or(EngineError::RuleIndexOutOfRange(index))?;
        *slot = on;
        Ok(())
    }

    pub fn toggle_output(&mut self, index: usize) -> Result<()> {
        let current = self.output(index)?;
        self.set_output(index, !current)
    }

    /// Next state of a cell given its left neighbor, itself and its right neighbor
    #[inline]
    pub fn apply(&self, left: bool, center: bool, right: bool) -> bool {
        let pattern = (left as usize) << 2 | (center as usize) << 1 | right as usize;
        self.0[pattern]
    }
}

impl From<u8> for ElementaryRule {
    fn from(number: u8) -> Self {
        Self(std::array::from_fn(|i| (number >> i) & 1 == 1))
    }
}

impl Default for ElementaryRule {
    /// Rule 90, the Sierpinski triangle
    fn default() -> Self {
        Self::from(90)
    }
}

/// Which neighbor set a boolean automaton counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Neighborhood {
    /// Orthogonal neighbors only
    #[default]
    VonNeumann,
    /// Orthogonal and diagonal neighbors
    Moore,
}

impl Neighborhood {
    /// Number of togglable thresholds (neighbor counts 1..=slots)
    pub const fn slots(self) -> usize {
        match self {
            Neighborhood::VonNeumann => 4,
            Neighborhood::Moore => 8,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Neighborhood::VonNeumann => Neighborhood::Moore,
            Neighborhood::Moore => Neighborhood::VonNeumann,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Neighborhood::VonNeumann => "Von Neumann",
            Neighborhood::Moore => "Moore",
        }
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Neighborhood {
    type Error = EngineError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Neighborhood::VonNeumann),
            1 => Ok(Neighborhood::Moore),
            other => Err(EngineError::UnknownNeighborhood(other)),
        }
    }
}

/// Toggled neighbor-count thresholds for both neighborhoods.
///
/// Bit `i` of a mask means "on with exactly `i + 1` live neighbors".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BooleanRuleSet {
    von_neumann: u8,
    moore: u8,
}

impl BooleanRuleSet {
    pub const fn empty() -> Self {
        Self {
            von_neumann: 0,
            moore: 0,
        }
    }

    fn check_index(neighborhood: Neighborhood, index: usize) -> Result<()> {
        if index < neighborhood.slots() {
            Ok(())
        } else {
            Err(EngineError::ThresholdIndexOutOfRange {
                neighborhood,
                index,
            })
        }
    }

    /// Threshold mask of one neighborhood
    pub const fn mask(&self, neighborhood: Neighborhood) -> u8 {
        match neighborhood {
            Neighborhood::VonNeumann => self.von_neumann,
            Neighborhood::Moore => self.moore,
        }
    }

    fn mask_mut(&mut self, neighborhood: Neighborhood) -> &mut u8 {
        match neighborhood {
            Neighborhood::VonNeumann => &mut self.von_neumann,
            Neighborhood::Moore => &mut self.moore,
        }
    }

    /// Whether threshold `index` (neighbor count `index + 1`) is toggled on
    pub fn is_set(&self, neighborhood: Neighborhood, index: usize) -> Result<bool> {
        Self::check_index(neighborhood, index)?;
        Ok((self.mask(neighborhood) >> index) & 1 == 1)
    }

    pub fn toggle(&mut self, neighborhood: Neighborhood, index: usize) -> Result<()> {
        Self::check_index(neighborhood, index)?;
        *self.mask_mut(neighborhood) ^= 1 << index;
        Ok(())
    }
}

impl Default for BooleanRuleSet {
    /// A cell switches on when exactly one neighbor is on
    fn default() -> Self {
        Self {
            von_neumann: 0b1,
            moore: 0b1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_number_round_trip() {
        for n in 0..=255u32 {
            let rule = ElementaryRule::from_number(n).unwrap();
            assert_eq!(rule.number() as u32, n);
        }
    }

    #[test]
    fn test_rule_30_table() {
        // 30 = 0b0001_1110: patterns 001, 010, 011, 100 are on
        let rule = ElementaryRule::from(30);
        assert_eq!(
            rule.table(),
            [false, true, true, true, true, false, false, false]
        );
        assert!(rule.apply(true, false, false));
        assert!(!rule.apply(true, true, true));
    }

    #[test]
    fn test_msb_is_pattern_111() {
        let mut table = [false; RULE_TABLE_LEN];
        table[7] = true;
        assert_eq!(ElementaryRule::from_table(table).number(), 128);
    }

    #[test]
    fn test_out_of_range_number_is_rejected() {
        assert_eq!(
            ElementaryRule::from_number(256),
            Err(EngineError::RuleNumberOutOfRange(256))
        );
    }

    #[test]
    fn test_output_editing() {
        let mut rule = ElementaryRule::from(0);
        rule.set_output(3, true).unwrap();
        assert_eq!(rule.number(), 8);

        rule.toggle_output(3).unwrap();
        assert_eq!(rule.number(), 0);

        assert_eq!(rule.toggle_output(8), Err(EngineError::RuleIndexOutOfRange(8)));
        assert_eq!(rule.number(), 0);
    }

    #[test]
    fn test_default_boolean_rules() {
        let rules = BooleanRuleSet::default();
        assert_eq!(rules.is_set(Neighborhood::VonNeumann, 0), Ok(true));
        assert_eq!(rules.is_set(Neighborhood::Moore, 0), Ok(true));
        assert_eq!(rules.is_set(Neighborhood::Moore, 1), Ok(false));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut rules = BooleanRuleSet::default();
        let before = rules;
        for index in 0..8 {
            rules.toggle(Neighborhood::Moore, index).unwrap();
            rules.toggle(Neighborhood::Moore, index).unwrap();
        }
        assert_eq!(rules, before);
    }

    #[test]
    fn test_toggle_only_touches_one_neighborhood() {
        let mut rules = BooleanRuleSet::empty();
        rules.toggle(Neighborhood::VonNeumann, 2).unwrap();
        assert_eq!(rules.mask(Neighborhood::VonNeumann), 0b100);
        assert_eq!(rules.mask(Neighborhood::Moore), 0);
    }

    #[test]
    fn test_invalid_threshold_index() {
        let mut rules = BooleanRuleSet::default();
        let err = rules.toggle(Neighborhood::VonNeumann, 4).unwrap_err();
        assert_eq!(
            err,
            EngineError::ThresholdIndexOutOfRange {
                neighborhood: Neighborhood::VonNeumann,
                index: 4
            }
        );
        assert!(rules.is_set(Neighborhood::Moore, 8).is_err());
        assert_eq!(rules, BooleanRuleSet::default());
    }

    #[test]
    fn test_neighborhood_codes() {
        assert_eq!(Neighborhood::try_from(0), Ok(Neighborhood::VonNeumann));
        assert_eq!(Neighborhood::try_from(1), Ok(Neighborhood::Moore));
        assert_eq!(Neighborhood::try_from(2), Err(EngineError::UnknownNeighborhood(2)));
    }
}
