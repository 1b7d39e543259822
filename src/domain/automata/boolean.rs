use super::{Automaton, Step};
use crate::domain::{BooleanRuleSet, Cell, Lattice, Neighborhood, Rule, StepStrategy, Surface, ThresholdRule};
use rand::rngs::StdRng;

/// Threshold automaton on one of the three lattices.
///
/// The rule is captured when the state is built; edits made on the engine
/// afterwards only apply once the automaton is initialized again.
pub struct BooleanAutomaton {
    lattice: Lattice,
    neighborhood: Neighborhood,
    rule: ThresholdRule,
}

impl BooleanAutomaton {
    pub fn new(lattice: Lattice, neighborhood: Neighborhood, rules: &BooleanRuleSet) -> Self {
        let slots = lattice.rule_slots(neighborhood);
        Self {
            lattice,
            neighborhood: slots,
            rule: ThresholdRule::new(rules.mask(slots)),
        }
    }

    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }
}

impl Automaton for BooleanAutomaton {
    /// A single foreground cell in the middle of the surface
    fn initialize(&mut self, surface: &mut Surface, _rng: &mut StdRng) -> usize {
        let (width, height) = surface.dimensions();
        surface.clear_all();
        surface.set(width / 2, height / 2, Cell::Alive);
        surface.front().count_alive()
    }

    fn step(&mut self, surface: &mut Surface, strategy: StepStrategy) -> Step {
        let (lattice, neighborhood, rule) = (self.lattice, self.neighborhood, self.rule);
        surface.advance_generation(strategy, |grid, x, y| {
            let neighbors = lattice.count_alive(grid, neighborhood, x, y);
            let current = grid.get(x, y).unwrap_or_default();
            rule.evolve(current, neighbors)
        });
        Step::Advanced {
            population: surface.front().count_alive(),
        }
    }
}
