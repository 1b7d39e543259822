use super::{Automaton, Step};
use crate::domain::{Cell, StepStrategy, Surface};
use rand::rngs::StdRng;

/// Munching squares: after `t` steps a pixel is on iff `(x ^ y) < t`.
///
/// The counter wraps at the smallest power of two covering the surface, so
/// the pattern fills up, clears and starts again.
#[derive(Default)]
pub struct MunchingSquares {
    t: usize,
    period: usize,
}

impl MunchingSquares {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(&self) -> usize {
        self.t
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

impl Automaton for MunchingSquares {
    fn initialize(&mut self, surface: &mut Surface, _rng: &mut StdRng) -> usize {
        let (width, height) = surface.dimensions();
        surface.clear_all();
        self.t = 0;
        self.period = width.max(height).next_power_of_two();
        surface.area()
    }

    fn step(&mut self, surface: &mut Surface, strategy: StepStrategy) -> Step {
        self.t = (self.t + 1) % self.period.max(1);
        let t = self.t;
        surface
            .front_mut()
            .fill_with(strategy, |x, y| Cell::from_alive((x ^ y) < t));
        // Every pixel is redrawn each step
        Step::Advanced {
            population: surface.area(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_first_step_is_the_diagonal() {
        let mut surface = Surface::new(8, 8);
        let mut munching = MunchingSquares::new();
        assert_eq!(munching.initialize(&mut surface, &mut StdRng::seed_from_u64(0)), 64);

        assert_eq!(munching.step(&mut surface, StepStrategy::Serial), Step::Advanced { population: 64 });
        for (x, y, cell) in surface.front().iter_cells() {
            assert_eq!(cell.is_alive(), x == y, "({x}, {y})");
        }
    }

    #[test]
    fn test_fills_then_wraps() {
        let mut surface = Surface::new(8, 6);
        let mut munching = MunchingSquares::new();
        munching.initialize(&mut surface, &mut StdRng::seed_from_u64(0));
        assert_eq!(munching.period(), 8);

        for _ in 0..7 {
            munching.step(&mut surface, StepStrategy::Parallel);
        }
        // t = 7: every pair except x ^ y == 7
        let off = surface.front().count(|c| !c.is_alive());
        let expected = (0..8usize)
            .flat_map(|x| (0..6usize).map(move |y| x ^ y))
            .filter(|&v| v >= 7)
            .count();
        assert_eq!(off, expected);

        munching.step(&mut surface, StepStrategy::Parallel);
        assert_eq!(munching.time(), 0);
        assert_eq!(surface.front().count_alive(), 0);
    }
}
