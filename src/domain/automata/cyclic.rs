use super::{Automaton, Step};
use crate::domain::{Cell, Lattice, MAX_CYCLIC_STATES, Neighborhood, StepStrategy, Surface};
use rand::{Rng, rngs::StdRng};

/// Cyclic cellular automaton on the wrapped square lattice.
///
/// A cell in state `s` moves to `(s + 1) % n` when one of its Von Neumann
/// neighbors already holds that successor; otherwise it keeps `s`.
pub struct CyclicAutomaton {
    num_states: u8,
}

impl CyclicAutomaton {
    pub fn new(num_states: u8) -> Self {
        Self {
            num_states: num_states.clamp(2, MAX_CYCLIC_STATES),
        }
    }

    pub fn num_states(&self) -> u8 {
        self.num_states
    }

    fn population(surface: &Surface) -> usize {
        surface
            .front()
            .count(|c| c.cyclic_state().is_some_and(|s| s != 0))
    }
}

impl Automaton for CyclicAutomaton {
    /// Uniformly random states
    fn initialize(&mut self, surface: &mut Surface, rng: &mut StdRng) -> usize {
        let (width, height) = surface.dimensions();
        surface.clear_all();
        for y in 0..height {
            for x in 0..width {
                surface.set(x, y, Cell::Cyclic(rng.random_range(0..self.num_states)));
            }
        }
        Self::population(surface)
    }

    fn step(&mut self, surface: &mut Surface, strategy: StepStrategy) -> Step {
        let n = self.num_states;
        surface.advance_generation(strategy, |grid, x, y| {
            let state = grid.get(x, y).and_then(Cell::cyclic_state).unwrap_or(0);
            let successor = Cell::Cyclic((state + 1) % n);
            if Lattice::Square.any_neighbor(grid, Neighborhood::VonNeumann, x, y, successor) {
                successor
            } else {
                Cell::Cyclic(state)
            }
        });
        Step::Advanced {
            population: Self::population(surface),
        }
    }
}
