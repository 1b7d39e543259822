//! The automaton engine: selected kind, editable settings, per-kind state
//! and the step/population counters.

use super::automata::{Automaton, AutomatonState, InitialStateType, Step};
use super::error::Result;
use super::{
    AutomatonKind, BooleanRuleSet, ElementaryRule, EngineError, Neighborhood, StepStrategy, Surface,
};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

/// Largest square ant brush, in pixels per side
pub const MAX_ANT_NUM_PIXELS: usize = 16;
pub const DEFAULT_ANT_NUM_PIXELS: usize = 4;
/// Number of cyclic states the palette can show
pub const MAX_CYCLIC_STATES: u8 = 4;
pub const MIN_CYCLIC_STATES: u8 = 2;
pub const DEFAULT_BML_DENSITY: u8 = 30;

/// Editable parameters. They are read when a kind is initialized, so a
/// change only shows up after the next [`CellularAutomata::initialize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub elementary_rule: ElementaryRule,
    pub initial_state: InitialStateType,
    pub boolean_rules: BooleanRuleSet,
    pub neighborhood: Neighborhood,
    pub ant_num_pixels: usize,
    pub bml_density: u8,
    pub num_states: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            elementary_rule: ElementaryRule::default(),
            initial_state: InitialStateType::default(),
            boolean_rules: BooleanRuleSet::default(),
            neighborhood: Neighborhood::default(),
            ant_num_pixels: DEFAULT_ANT_NUM_PIXELS,
            bml_density: DEFAULT_BML_DENSITY,
            num_states: MAX_CYCLIC_STATES,
        }
    }
}

/// Cellular automata engine.
///
/// Owns the rules, the per-kind state and the counters; the surface is
/// borrowed for every call that draws. Rejected edits return an error and
/// leave the engine untouched.
pub struct CellularAutomata {
    kind: AutomatonKind,
    settings: Settings,
    state: Option<AutomatonState>,
    num_steps: u64,
    population: usize,
    strategy: StepStrategy,
    rng: StdRng,
}

impl CellularAutomata {
    /// Create an engine whose random draws all come from `seed`
    pub fn new(seed: u64, strategy: StepStrategy) -> Self {
        Self {
            kind: AutomatonKind::default(),
            settings: Settings::default(),
            state: None,
            num_steps: 0,
            population: 0,
            strategy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn strategy(&self) -> StepStrategy {
        self.strategy
    }

    /// Select a kind. The previous kind's state is discarded; stepping is
    /// refused until the new kind is initialized.
    pub fn set_type(&mut self, kind: AutomatonKind) {
        debug!("automaton kind: {} -> {}", self.kind, kind);
        self.kind = kind;
        self.state = None;
        self.num_steps = 0;
        self.population = 0;
    }

    pub fn kind(&self) -> AutomatonKind {
        self.kind
    }

    /// Build fresh state for the current kind from the current settings and
    /// draw its initial configuration.
    pub fn initialize(&mut self, surface: &mut Surface) {
        let mut state = AutomatonState::for_kind(self.kind, &self.settings);
        self.population = state.initialize(surface, &mut self.rng);
        self.num_steps = 0;
        self.state = Some(state);
        debug!(
            "initialized {} on {:?}, population {}",
            self.kind,
            surface.dimensions(),
            self.population
        );
    }

    /// Advance one step. A finished automaton reports [`Step::Halted`] and
    /// leaves the counters alone.
    pub fn next_step(&mut self, surface: &mut Surface) -> Result<Step> {
        let kind = self.kind;
        let state = self.state.as_mut().ok_or(EngineError::NotInitialized(kind))?;

        let step = state.step(surface, self.strategy);
        if let Step::Advanced { population } = step {
            self.num_steps += 1;
            self.population = population;
            if state.has_finished() {
                info!("{} finished after {} steps, population {}", kind, self.num_steps, population);
            }
        }
        Ok(step)
    }

    /// Step until the automaton finishes or `max_steps` steps were taken.
    /// Returns the number of steps taken.
    pub fn run(&mut self, surface: &mut Surface, max_steps: u64) -> Result<u64> {
        let mut taken = 0;
        while taken < max_steps {
            match self.next_step(surface)? {
                Step::Advanced { .. } => taken += 1,
                Step::Halted => break,
            }
        }
        Ok(taken)
    }

    pub fn has_finished(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.has_finished())
    }

    pub fn num_steps(&self) -> u64 {
        self.num_steps
    }

    pub fn population(&self) -> usize {
        self.population
    }

    // Elementary rule

    pub fn rule_number(&self) -> u8 {
        self.settings.elementary_rule.number()
    }

    pub fn set_rule_number(&mut self, number: u32) -> Result<()> {
        self.settings.elementary_rule = ElementaryRule::from_number(number)?;
        Ok(())
    }

    /// Output of the rule for pattern `index` (`left*4 + center*2 + right`)
    pub fn rule_output(&self, index: usize) -> Result<bool> {
        self.settings.elementary_rule.output(index)
    }

    pub fn set_rule_output(&mut self, index: usize, on: bool) -> Result<()> {
        self.settings.elementary_rule.set_output(index, on)
    }

    pub fn toggle_rule_output(&mut self, index: usize) -> Result<()> {
        self.settings.elementary_rule.toggle_output(index)
    }

    pub fn initial_state_type(&self) -> InitialStateType {
        self.settings.initial_state
    }

    pub fn set_initial_state_type(&mut self, initial_state: InitialStateType) {
        self.settings.initial_state = initial_state;
    }

    // Boolean automata

    pub fn type_of_neighborhood(&self) -> Neighborhood {
        self.settings.neighborhood
    }

    pub fn set_type_of_neighborhood(&mut self, neighborhood: Neighborhood) {
        self.settings.neighborhood = neighborhood;
    }

    /// Threshold set the current kind reads: hex lattices always use the
    /// Moore slots, everything else follows the neighborhood flag.
    pub fn active_rule_slots(&self) -> Neighborhood {
        self.kind.lattice().rule_slots(self.settings.neighborhood)
    }

    /// Is threshold `index` (count `index + 1`) of `neighborhood` set?
    /// Either set can be read whichever one the current kind uses.
    pub fn check_boolean_rule_value(&self, neighborhood: Neighborhood, index: usize) -> Result<bool> {
        self.settings.boolean_rules.is_set(neighborhood, index)
    }

    pub fn toggle_boolean_rule_value(&mut self, neighborhood: Neighborhood, index: usize) -> Result<()> {
        self.settings.boolean_rules.toggle(neighborhood, index)
    }

    /// Both threshold sets back to "exactly one neighbor"
    pub fn set_default_boolean_rule_values(&mut self) {
        self.settings.boolean_rules = BooleanRuleSet::default();
    }

    // Ant

    pub fn ant_num_pixels(&self) -> usize {
        self.settings.ant_num_pixels
    }

    pub fn set_ant_num_pixels(&mut self, pixels: usize) -> Result<()> {
        if !(1..=MAX_ANT_NUM_PIXELS).contains(&pixels) {
            return Err(EngineError::BrushSizeOutOfRange(pixels));
        }
        self.settings.ant_num_pixels = pixels;
        Ok(())
    }

    // BML traffic

    pub fn bml_density(&self) -> u8 {
        self.settings.bml_density
    }

    pub fn set_bml_density(&mut self, density: u8) -> Result<()> {
        if density > 100 {
            return Err(EngineError::DensityOutOfRange(density));
        }
        self.settings.bml_density = density;
        Ok(())
    }

    // Cyclic

    pub fn num_states(&self) -> u8 {
        self.settings.num_states
    }

    pub fn set_num_states(&mut self, num_states: u8) -> Result<()> {
        if !(MIN_CYCLIC_STATES..=MAX_CYCLIC_STATES).contains(&num_states) {
            return Err(EngineError::StateCountOutOfRange(num_states));
        }
        self.settings.num_states = num_states;
        Ok(())
    }
}
