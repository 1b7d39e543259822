use crate::config::SimConfig;
use crate::domain::{
    AutomatonKind, Buffer, CellularAutomata, EngineError, Result, Seed, Surface, presets,
};
use log::{info, warn};

/// Ant moves per scheduled update; one move at a time is too slow to watch
pub const ANT_STEPS_PER_UPDATE: u64 = 50;

/// Session drives the engine.
/// This is the application layer: it owns the engine and the surface, paces
/// steps and turns user edits into engine calls followed by a restart.
pub struct Session {
    pub engine: CellularAutomata,
    pub surface: Surface,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_step_time_ms: f32,
    /// Last rejected edit, shown until the next accepted one
    pub last_error: Option<EngineError>,
    seeds: Vec<Seed>,
    seed_index: usize,
}

impl Session {
    pub fn new(config: &SimConfig) -> Self {
        let seed = config.resolve_seed();
        info!(
            "session {}x{}, seed {}, {} stepping",
            config.width,
            config.height,
            seed,
            config.strategy.name()
        );
        Self {
            engine: CellularAutomata::new(seed, config.strategy),
            surface: Surface::new(config.width, config.height),
            is_running: true,
            update_timer: 0.0,
            updates_per_second: config.steps_per_second,
            last_step_time_ms: 0.0,
            last_error: None,
            seeds: presets::all_seeds(),
            seed_index: 0,
        }
        .restart()
    }

    pub fn kind(&self) -> AutomatonKind {
        self.engine.kind()
    }

    /// Seed used for Life runs
    pub fn seed(&self) -> Option<&Seed> {
        self.seeds.get(self.seed_index)
    }

    /// Switch to another kind and start it
    pub fn select_kind(mut self, kind: AutomatonKind) -> Self {
        self.engine.set_type(kind);
        self.restart()
    }

    /// Initialize the current kind again with the current settings.
    /// Life gets the selected seed drawn first; the elementary trace is
    /// drawn to the bottom right away.
    pub fn restart(mut self) -> Self {
        let kind = self.engine.kind();
        if kind == AutomatonKind::ConwayLife {
            self.surface.clear_all();
            if let Some(seed) = self.seeds.get(self.seed_index) {
                seed.apply(self.surface.front_mut());
            }
        }
        self.engine.initialize(&mut self.surface);
        self.surface.present(Buffer::Primary);
        if kind == AutomatonKind::ElementaryCA {
            let result = self.engine.run(&mut self.surface, u64::MAX);
            self.record(result);
        }
        self.update_timer = 0.0;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Show the scratch buffer instead of the current generation, or back
    pub fn toggle_shown_buffer(mut self) -> Self {
        let next = self.surface.presented().other();
        self.surface.present(next);
        self
    }

    /// Flip rule slot `index`: an elementary rule output for the elementary
    /// automaton, a threshold for the boolean ones
    pub fn toggle_rule_slot(mut self, index: usize) -> Self {
        let result = match self.engine.kind() {
            AutomatonKind::ElementaryCA => self.engine.toggle_rule_output(index),
            AutomatonKind::BooleanSquare | AutomatonKind::BooleanHex | AutomatonKind::BooleanTriangular => {
                let slots = self.engine.active_rule_slots();
                self.engine.toggle_boolean_rule_value(slots, index)
            }
            _ => return self,
        };
        self.apply_edit(result)
    }

    pub fn toggle_neighborhood(mut self) -> Self {
        let next = self.engine.type_of_neighborhood().toggled();
        self.engine.set_type_of_neighborhood(next);
        self.apply_edit(Ok(()))
    }

    pub fn reset_boolean_rules(mut self) -> Self {
        self.engine.set_default_boolean_rule_values();
        self.apply_edit(Ok(()))
    }

    pub fn next_initial_state(mut self) -> Self {
        let next = self.engine.initial_state_type().next();
        self.engine.set_initial_state_type(next);
        self.apply_edit(Ok(()))
    }

    pub fn adjust_brush(mut self, delta: isize) -> Self {
        let pixels = self.engine.ant_num_pixels().saturating_add_signed(delta);
        let result = self.engine.set_ant_num_pixels(pixels);
        self.apply_edit(result)
    }

    pub fn adjust_density(mut self, delta: i16) -> Self {
        let density = (i16::from(self.engine.bml_density()) + delta).clamp(0, i16::from(u8::MAX));
        let result = self.engine.set_bml_density(density as u8);
        self.apply_edit(result)
    }

    pub fn adjust_num_states(mut self, delta: i8) -> Self {
        let states = self.engine.num_states().saturating_add_signed(delta);
        let result = self.engine.set_num_states(states);
        self.apply_edit(result)
    }

    /// Cycle through the Life seeds
    pub fn next_seed(mut self) -> Self {
        if !self.seeds.is_empty() {
            self.seed_index = (self.seed_index + 1) % self.seeds.len();
        }
        if self.engine.kind() == AutomatonKind::ConwayLife {
            self.restart()
        } else {
            self
        }
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running || self.engine.has_finished() {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            let steps = match self.engine.kind() {
                AutomatonKind::LangtonAnt | AutomatonKind::LangtonHexAnt => ANT_STEPS_PER_UPDATE,
                _ => 1,
            };
            let start = std::time::Instant::now();
            let result = self.engine.run(&mut self.surface, steps);
            self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
            self.record(result);
            self.update_timer = 0.0;
        }

        self
    }

    /// Restart after an accepted edit; keep everything as it was after a
    /// rejected one
    fn apply_edit(mut self, result: Result<()>) -> Self {
        match self.record(result) {
            Some(()) => self.restart(),
            None => self,
        }
    }

    fn record<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Some(value)
            }
            Err(err) => {
                warn!("rejected: {err}");
                self.last_error = Some(err);
                None
            }
        }
    }
}
