use super::{Automaton, Step};
use crate::domain::{Cell, ConwayRule, Lattice, Neighborhood, Rule, StepStrategy, Surface};
use rand::rngs::StdRng;

/// Conway's Game of Life on the wrapped square lattice.
///
/// Initializing keeps the live cells already on the surface, so callers
/// seed the pattern first and then initialize. Any other color is cleared.
#[derive(Default)]
pub struct ConwayLife {
    rule: ConwayRule,
}

impl ConwayLife {
    pub fn new() -> Self {
        Self { rule: ConwayRule }
    }
}

impl Automaton for ConwayLife {
    fn initialize(&mut self, surface: &mut Surface, _rng: &mut StdRng) -> usize {
        surface.advance_generation(StepStrategy::Serial, |grid, x, y| {
            Cell::from_alive(grid.get(x, y).is_some_and(Cell::is_alive))
        });
        surface.front().count_alive()
    }

    fn step(&mut self, surface: &mut Surface, strategy: StepStrategy) -> Step {
        let rule = &self.rule;
        surface.advance_generation(strategy, |grid, x, y| {
            let neighbors = Lattice::Square.count_alive(grid, Neighborhood::Moore, x, y);
            rule.evolve(grid.get(x, y).unwrap_or_default(), neighbors)
        });
        Step::Advanced {
            population: surface.front().count(Cell::is_alive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_blinker_oscillates() {
        let mut surface = Surface::new(5, 5);
        surface.front_mut().draw_hline(1, 2, 3, Cell::Alive);
        let mut life = ConwayLife::new();
        assert_eq!(life.initialize(&mut surface, &mut StdRng::seed_from_u64(0)), 3);

        assert_eq!(life.step(&mut surface, StepStrategy::Parallel), Step::Advanced { population: 3 });
        assert_eq!(surface.get(2, 1), Some(Cell::Alive));
        assert_eq!(surface.get(2, 3), Some(Cell::Alive));
        assert_eq!(surface.get(1, 2), Some(Cell::Dead));

        life.step(&mut surface, StepStrategy::Parallel);
        assert_eq!(surface.get(1, 2), Some(Cell::Alive));
        assert_eq!(surface.get(2, 1), Some(Cell::Dead));
    }

    #[test]
    fn test_initialize_keeps_seed() {
        let mut surface = Surface::new(8, 8);
        surface.fill_rect(1, 1, 2, 2, Cell::Alive);
        let mut life = ConwayLife::new();
        assert_eq!(life.initialize(&mut surface, &mut StdRng::seed_from_u64(0)), 4);

        // Block is a still life
        life.step(&mut surface, StepStrategy::Serial);
        assert_eq!(surface.front().count_alive(), 4);
        assert_eq!(surface.get(2, 2), Some(Cell::Alive));
    }

    #[test]
    fn test_initialize_clears_foreign_colors() {
        let mut surface = Surface::new(6, 6);
        surface.fill_rect(0, 0, 6, 2, Cell::EastCar);
        surface.set(5, 5, Cell::Cyclic(3));
        surface.set(1, 4, Cell::NorthCar);
        surface.front_mut().draw_hline(1, 3, 3, Cell::Alive);

        let mut life = ConwayLife::new();
        assert_eq!(life.initialize(&mut surface, &mut StdRng::seed_from_u64(0)), 3);
        assert_eq!(surface.front().count(|c| c == Cell::Dead), 33);
        assert_eq!(surface.get(2, 3), Some(Cell::Alive));
    }

    #[test]
    fn test_glider_wraps_around() {
        let mut surface = Surface::new(8, 8);
        for (x, y) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
            surface.set(x, y, Cell::Alive);
        }
        let start = surface.front().clone();
        let mut life = ConwayLife::new();
        life.initialize(&mut surface, &mut StdRng::seed_from_u64(0));

        // A glider moves one cell diagonally every 4 generations
        for _ in 0..32 {
            assert_eq!(life.step(&mut surface, StepStrategy::Parallel), Step::Advanced { population: 5 });
        }
        assert_eq!(surface.front(), &start);
    }
}
