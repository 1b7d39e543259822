//! Langton's ant on the square and hexagonal lattices.
//!
//! Both ants follow the same step: read the cell under the ant, turn right
//! on background and left on foreground, flip the cell, move one cell along
//! the new heading. Walking off the grid finishes the ant for good.

use super::{Automaton, Step};
use crate::domain::{Cell, StepStrategy, Surface};
use rand::rngs::StdRng;

/// Heading of the square-lattice ant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Turns left (counter-clockwise).
    pub fn turn_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::East => Heading::North,
            Heading::South => Heading::East,
            Heading::West => Heading::South,
        }
    }

    /// Turns right (clockwise).
    pub fn turn_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Returns the offset for moving in this direction (y grows downwards).
    pub fn offset(self) -> (isize, isize) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }
}

/// Heading of the hex-lattice ant, pointy-top hexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexHeading {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl HexHeading {
    const CLOCKWISE: [HexHeading; 6] = [
        HexHeading::East,
        HexHeading::SouthEast,
        HexHeading::SouthWest,
        HexHeading::West,
        HexHeading::NorthWest,
        HexHeading::NorthEast,
    ];

    fn clockwise_index(self) -> usize {
        Self::CLOCKWISE
            .iter()
            .position(|&h| h == self)
            .unwrap_or_default()
    }

    /// Turns 60 degrees clockwise
    pub fn turn_right(self) -> Self {
        Self::CLOCKWISE[(self.clockwise_index() + 1) % 6]
    }

    /// Turns 60 degrees counter-clockwise
    pub fn turn_left(self) -> Self {
        Self::CLOCKWISE[(self.clockwise_index() + 5) % 6]
    }

    /// Offset in "odd-r" coordinates; diagonal moves depend on row parity
    pub fn offset(self, y: usize) -> (isize, isize) {
        let odd = (y % 2) as isize;
        match self {
            HexHeading::East => (1, 0),
            HexHeading::West => (-1, 0),
            HexHeading::NorthEast => (odd, -1),
            HexHeading::NorthWest => (odd - 1, -1),
            HexHeading::SouthEast => (odd, 1),
            HexHeading::SouthWest => (odd - 1, 1),
        }
    }
}

/// Move (x, y) by (dx, dy) inside a `cols` x `rows` lattice
fn moved(x: usize, y: usize, (dx, dy): (isize, isize), cols: usize, rows: usize) -> Option<(usize, usize)> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    (nx < cols && ny < rows).then_some((nx, ny))
}

/// Square-lattice ant. The ant walks a lattice of `brush` x `brush` pixel
/// blocks; the brush size only changes how big each visited cell is drawn.
pub struct SquareAnt {
    x: usize,
    y: usize,
    heading: Heading,
    brush: usize,
    cols: usize,
    rows: usize,
    finished: bool,
    population: usize,
}

impl SquareAnt {
    pub fn new(brush: usize) -> Self {
        Self {
            x: 0,
            y: 0,
            heading: Heading::North,
            brush: brush.max(1),
            cols: 0,
            rows: 0,
            finished: false,
            population: 0,
        }
    }

    /// Position on the ant lattice (in brush blocks)
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }
}

impl Automaton for SquareAnt {
    fn initialize(&mut self, surface: &mut Surface, _rng: &mut StdRng) -> usize {
        let (width, height) = surface.dimensions();
        surface.clear_all();
        self.cols = width / self.brush;
        self.rows = height / self.brush;
        self.x = self.cols / 2;
        self.y = self.rows / 2;
        self.heading = Heading::North;
        self.population = 0;
        // A lattice too small for one brush block has nowhere to start
        self.finished = self.cols == 0 || self.rows == 0;
        0
    }

    fn step(&mut self, surface: &mut Surface, _strategy: StepStrategy) -> Step {
        if self.finished {
            return Step::Halted;
        }
        let (px, py) = (self.x * self.brush, self.y * self.brush);
        let cell = surface.get(px, py).unwrap_or_default();

        self.heading = if cell.is_alive() {
            self.heading.turn_left()
        } else {
            self.heading.turn_right()
        };

        let painted = cell.toggle();
        surface.fill_rect(px, py, self.brush, self.brush, painted);
        let block = self.brush * self.brush;
        if painted.is_alive() {
            self.population += block;
        } else {
            self.population = self.population.saturating_sub(block);
        }

        match moved(self.x, self.y, self.heading.offset(), self.cols, self.rows) {
            Some((x, y)) => (self.x, self.y) = (x, y),
            None => self.finished = true,
        }

        Step::Advanced {
            population: self.population,
        }
    }

    fn has_finished(&self) -> bool {
        self.finished
    }
}

/// Hex-lattice ant, one grid cell per hex.
pub struct HexAnt {
    x: usize,
    y: usize,
    heading: HexHeading,
    cols: usize,
    rows: usize,
    finished: bool,
    population: usize,
}

impl HexAnt {
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            heading: HexHeading::NorthEast,
            cols: 0,
            rows: 0,
            finished: false,
            population: 0,
        }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn heading(&self) -> HexHeading {
        self.heading
    }
}

impl Default for HexAnt {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton for HexAnt {
    fn initialize(&mut self, surface: &mut Surface, _rng: &mut StdRng) -> usize {
        let (width, height) = surface.dimensions();
        surface.clear_all();
        self.cols = width;
        self.rows = height;
        self.x = width / 2;
        self.y = height / 2;
        self.heading = HexHeading::NorthEast;
        self.population = 0;
        self.finished = width == 0 || height == 0;
        0
    }

    fn step(&mut self, surface: &mut Surface, _strategy: StepStrategy) -> Step {
        if self.finished {
            return Step::Halted;
        }
        let cell = surface.get(self.x, self.y).unwrap_or_default();

        self.heading = if cell.is_alive() {
            self.heading.turn_left()
        } else {
            self.heading.turn_right()
        };

        let painted = cell.toggle();
        surface.set(self.x, self.y, painted);
        if painted.is_alive() {
            self.population += 1;
        } else {
            self.population = self.population.saturating_sub(1);
        }

        match moved(self.x, self.y, self.heading.offset(self.y), self.cols, self.rows) {
            Some((x, y)) => (self.x, self.y) = (x, y),
            None => self.finished = true,
        }

        Step::Advanced {
            population: self.population,
        }
    }

    fn has_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0)
    }

    #[test]
    fn test_headings_turn_full_circle() {
        let mut h = Heading::North;
        for _ in 0..4 {
            h = h.turn_right();
        }
        assert_eq!(h, Heading::North);
        assert_eq!(Heading::North.turn_left(), Heading::West);

        let mut hex = HexHeading::East;
        for _ in 0..6 {
            hex = hex.turn_left();
        }
        assert_eq!(hex, HexHeading::East);
        assert_eq!(HexHeading::East.turn_right(), HexHeading::SouthEast);
        assert_eq!(HexHeading::East.turn_left(), HexHeading::NorthEast);
    }

    #[test]
    fn test_first_step_on_blank_grid() {
        let mut surface = Surface::new(11, 11);
        let mut ant = SquareAnt::new(1);
        ant.initialize(&mut surface, &mut rng());
        assert_eq!(ant.position(), (5, 5));

        // Background: turn right (north -> east), paint, move east
        assert_eq!(ant.step(&mut surface, StepStrategy::Serial), Step::Advanced { population: 1 });
        assert_eq!(surface.get(5, 5), Some(Cell::Alive));
        assert_eq!(ant.heading(), Heading::East);
        assert_eq!(ant.position(), (6, 5));
    }

    #[test]
    fn test_leaving_a_visited_cell_turns_left() {
        let mut surface = Surface::new(11, 11);
        let mut ant = SquareAnt::new(1);
        ant.initialize(&mut surface, &mut rng());
        surface.set(5, 5, Cell::Alive);

        assert_eq!(ant.step(&mut surface, StepStrategy::Serial), Step::Advanced { population: 0 });
        assert_eq!(ant.heading(), Heading::West);
        assert_eq!(surface.get(5, 5), Some(Cell::Dead));
    }

    #[test]
    fn test_brush_paints_blocks() {
        let mut surface = Surface::new(40, 40);
        let mut ant = SquareAnt::new(4);
        ant.initialize(&mut surface, &mut rng());
        assert_eq!(ant.position(), (5, 5));

        ant.step(&mut surface, StepStrategy::Serial);
        assert_eq!(surface.front().count_alive(), 16);
        assert_eq!(surface.get(20, 20), Some(Cell::Alive));
        assert_eq!(surface.get(23, 23), Some(Cell::Alive));
        assert_eq!(surface.get(24, 20), Some(Cell::Dead));
    }

    #[test]
    fn test_square_ant_leaves_the_grid() {
        let (w, h) = (32, 32);
        let mut surface = Surface::new(w, h);
        let mut ant = SquareAnt::new(1);
        ant.initialize(&mut surface, &mut rng());

        let mut steps = 0;
        while !ant.has_finished() && steps < 100 * w * h {
            ant.step(&mut surface, StepStrategy::Serial);
            steps += 1;
        }
        assert!(ant.has_finished());
        assert_eq!(ant.step(&mut surface, StepStrategy::Serial), Step::Halted);
        assert_eq!(surface.front().count_alive(), ant.population);
    }

    #[test]
    fn test_hex_ant_on_single_cell() {
        let mut surface = Surface::new(1, 1);
        let mut ant = HexAnt::new();
        ant.initialize(&mut surface, &mut rng());

        assert_eq!(ant.step(&mut surface, StepStrategy::Serial), Step::Advanced { population: 1 });
        assert!(ant.has_finished());
        assert_eq!(surface.get(0, 0), Some(Cell::Alive));
        assert_eq!(ant.step(&mut surface, StepStrategy::Serial), Step::Halted);
    }

    #[test]
    fn test_hex_ant_circles_on_blank_grid() {
        // Always on background for the first six moves: six right turns
        // walk once around a hexagon and come back to the start.
        let mut surface = Surface::new(21, 21);
        let mut ant = HexAnt::new();
        ant.initialize(&mut surface, &mut rng());
        let start = ant.position();

        for _ in 0..6 {
            ant.step(&mut surface, StepStrategy::Serial);
        }
        assert_eq!(ant.position(), start);
        assert_eq!(surface.front().count_alive(), 6);
    }

    #[test]
    fn test_too_small_for_brush_is_finished() {
        let mut surface = Surface::new(3, 3);
        let mut ant = SquareAnt::new(4);
        ant.initialize(&mut surface, &mut rng());
        assert!(ant.has_finished());
        assert_eq!(ant.step(&mut surface, StepStrategy::Serial), Step::Halted);
    }
}
