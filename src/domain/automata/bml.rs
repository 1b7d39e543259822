use super::{Automaton, Step};
use crate::domain::{Cell, StepStrategy, Surface};
use rand::{Rng, rngs::StdRng};

/// Which cars move on a half-step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    East,
    North,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::East => Orientation::North,
            Orientation::North => Orientation::East,
        }
    }

    pub fn car(self) -> Cell {
        match self {
            Orientation::East => Cell::EastCar,
            Orientation::North => Cell::NorthCar,
        }
    }

    /// Direction of travel (y grows downwards)
    fn offset(self) -> (isize, isize) {
        match self {
            Orientation::East => (1, 0),
            Orientation::North => (0, -1),
        }
    }
}

/// Biham-Middleton-Levine traffic on a torus.
///
/// One step moves every car of the current orientation one cell forward
/// when the cell ahead is empty, then hands the turn to the other
/// orientation. Eastbound cars go first.
pub struct BmlTraffic {
    density: u8,
    turn: Orientation,
    cars: usize,
}

impl BmlTraffic {
    /// `density` is the car percentage used when seeding
    pub fn new(density: u8) -> Self {
        Self {
            density: density.min(100),
            turn: Orientation::East,
            cars: 0,
        }
    }

    pub fn density(&self) -> u8 {
        self.density
    }

    /// Orientation that moves on the next step
    pub fn turn(&self) -> Orientation {
        self.turn
    }
}

impl Automaton for BmlTraffic {
    fn initialize(&mut self, surface: &mut Surface, rng: &mut StdRng) -> usize {
        let (width, height) = surface.dimensions();
        surface.clear_all();
        self.turn = Orientation::East;

        let p = f64::from(self.density) / 100.0;
        for y in 0..height {
            for x in 0..width {
                if rng.random_bool(p) {
                    let car = if rng.random_bool(0.5) {
                        Cell::EastCar
                    } else {
                        Cell::NorthCar
                    };
                    surface.set(x, y, car);
                }
            }
        }

        self.cars = surface.front().count(Cell::is_car);
        self.cars
    }

    fn step(&mut self, surface: &mut Surface, strategy: StepStrategy) -> Step {
        let mover = self.turn.car();
        let (dx, dy) = self.turn.offset();

        surface.advance_generation(strategy, |grid, x, y| {
            let (x, y) = (x as isize, y as isize);
            let here = grid.get_wrapped(x, y);
            if here == mover {
                // Stay unless the cell ahead is free
                let ahead = grid.get_wrapped(x + dx, y + dy);
                return if ahead.is_car() { mover } else { Cell::Dead };
            }
            if here.is_car() {
                return here;
            }
            // Empty: filled by the car behind, if it moves in
            if grid.get_wrapped(x - dx, y - dy) == mover {
                mover
            } else {
                Cell::Dead
            }
        });

        self.turn = self.turn.flipped();
        Step::Advanced { population: self.cars }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn blank(width: usize, height: usize) -> (Surface, BmlTraffic) {
        let mut surface = Surface::new(width, height);
        let mut bml = BmlTraffic::new(0);
        bml.initialize(&mut surface, &mut StdRng::seed_from_u64(0));
        (surface, bml)
    }

    #[test]
    fn test_orientations_alternate() {
        let (mut surface, mut bml) = blank(5, 5);
        surface.set(1, 2, Cell::EastCar);
        surface.set(3, 3, Cell::NorthCar);

        bml.step(&mut surface, StepStrategy::Serial);
        assert_eq!(surface.get(2, 2), Some(Cell::EastCar));
        assert_eq!(surface.get(3, 3), Some(Cell::NorthCar));
        assert_eq!(bml.turn(), Orientation::North);

        bml.step(&mut surface, StepStrategy::Serial);
        assert_eq!(surface.get(2, 2), Some(Cell::EastCar));
        assert_eq!(surface.get(3, 2), Some(Cell::NorthCar));
        assert_eq!(surface.get(3, 3), Some(Cell::Dead));
    }

    #[test]
    fn test_blocked_car_waits() {
        let (mut surface, mut bml) = blank(5, 5);
        surface.set(1, 1, Cell::EastCar);
        surface.set(2, 1, Cell::NorthCar);

        bml.step(&mut surface, StepStrategy::Serial);
        assert_eq!(surface.get(1, 1), Some(Cell::EastCar));
        assert_eq!(surface.get(2, 1), Some(Cell::NorthCar));
    }

    #[test]
    fn test_queue_moves_only_at_the_front() {
        let (mut surface, mut bml) = blank(6, 1);
        surface.fill_rect(0, 0, 3, 1, Cell::EastCar);

        bml.step(&mut surface, StepStrategy::Serial);
        let row: Vec<bool> = surface.front().row(0).unwrap().iter().map(|c| c.is_car()).collect();
        assert_eq!(row, vec![true, true, false, true, false, false]);
    }

    #[test]
    fn test_cars_wrap_around() {
        let (mut surface, mut bml) = blank(4, 4);
        surface.set(3, 1, Cell::EastCar);
        surface.set(2, 0, Cell::NorthCar);

        bml.step(&mut surface, StepStrategy::Serial);
        assert_eq!(surface.get(0, 1), Some(Cell::EastCar));
        bml.step(&mut surface, StepStrategy::Serial);
        assert_eq!(surface.get(2, 3), Some(Cell::NorthCar));
    }

    #[test]
    fn test_car_count_is_conserved() {
        let mut surface = Surface::new(48, 32);
        let mut bml = BmlTraffic::new(35);
        let cars = bml.initialize(&mut surface, &mut StdRng::seed_from_u64(11));
        assert!(cars > 0);

        for _ in 0..50 {
            assert_eq!(bml.step(&mut surface, StepStrategy::Parallel), Step::Advanced { population: cars });
            assert_eq!(surface.front().count(Cell::is_car), cars);
        }
    }

    #[test]
    fn test_density_bounds() {
        let mut surface = Surface::new(10, 10);
        assert_eq!(BmlTraffic::new(0).initialize(&mut surface, &mut StdRng::seed_from_u64(1)), 0);
        assert_eq!(BmlTraffic::new(100).initialize(&mut surface, &mut StdRng::seed_from_u64(1)), 100);
    }
}
