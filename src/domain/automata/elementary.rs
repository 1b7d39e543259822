use super::{Automaton, Step};
use crate::domain::{Cell, ElementaryRule, EngineError, StepStrategy, Surface};
use rand::{Rng, rngs::StdRng};

/// First row of an elementary automaton trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InitialStateType {
    /// One foreground cell in the middle of the row
    #[default]
    SingleCell,
    /// Each cell is foreground with probability 1/2
    Random,
    /// Every cell is foreground
    AllOn,
}

impl InitialStateType {
    pub fn name(&self) -> &'static str {
        match self {
            InitialStateType::SingleCell => "Single cell",
            InitialStateType::Random => "Random",
            InitialStateType::AllOn => "All on",
        }
    }

    pub fn next(self) -> Self {
        match self {
            InitialStateType::SingleCell => InitialStateType::Random,
            InitialStateType::Random => InitialStateType::AllOn,
            InitialStateType::AllOn => InitialStateType::SingleCell,
        }
    }
}

impl TryFrom<u8> for InitialStateType {
    type Error = EngineError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(InitialStateType::SingleCell),
            1 => Ok(InitialStateType::Random),
            2 => Ok(InitialStateType::AllOn),
            other => Err(EngineError::UnknownInitialState(other)),
        }
    }
}

/// Elementary automaton traced down the surface: generation `n` is row `n`.
pub struct ElementaryAutomaton {
    rule: ElementaryRule,
    initial_state: InitialStateType,
    row: usize,
    height: usize,
}

impl ElementaryAutomaton {
    pub fn new(rule: ElementaryRule, initial_state: InitialStateType) -> Self {
        Self {
            rule,
            initial_state,
            row: 0,
            height: 0,
        }
    }

    /// Row holding the latest generation
    pub fn current_row(&self) -> usize {
        self.row
    }
}

impl Automaton for ElementaryAutomaton {
    fn initialize(&mut self, surface: &mut Surface, rng: &mut StdRng) -> usize {
        let (width, height) = surface.dimensions();
        surface.clear_all();
        self.row = 0;
        self.height = height;

        if height == 0 || width == 0 {
            return 0;
        }

        match self.initial_state {
            InitialStateType::SingleCell => surface.set(width / 2, 0, Cell::Alive),
            InitialStateType::Random => (0..width)
                .filter(|_| rng.random_bool(0.5))
                .for_each(|x| surface.set(x, 0, Cell::Alive)),
            InitialStateType::AllOn => surface.fill_rect(0, 0, width, 1, Cell::Alive),
        }

        surface
            .front()
            .row(0)
            .map_or(0, |row| row.iter().filter(|c| c.is_alive()).count())
    }

    fn step(&mut self, surface: &mut Surface, _strategy: StepStrategy) -> Step {
        if self.has_finished() {
            return Step::Halted;
        }
        let Some(current) = surface.front().row(self.row) else {
            return Step::Halted;
        };

        let width = current.len();
        let alive: Vec<bool> = current.iter().map(|c| c.is_alive()).collect();
        let next: Vec<bool> = (0..width)
            .map(|x| {
                let left = alive[(x + width - 1) % width];
                let right = alive[(x + 1) % width];
                self.rule.apply(left, alive[x], right)
            })
            .collect();

        self.row += 1;
        for (x, &on) in next.iter().enumerate() {
            surface.set(x, self.row, Cell::from_alive(on));
        }

        Step::Advanced {
            population: next.iter().filter(|&&on| on).count(),
        }
    }

    /// The trace has reached the bottom of the surface
    fn has_finished(&self) -> bool {
        self.row + 1 >= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn row_string(surface: &Surface, y: usize) -> String {
        surface
            .front()
            .row(y)
            .unwrap()
            .iter()
            .map(|c| if c.is_alive() { '#' } else { '.' })
            .collect()
    }

    #[test]
    fn test_rule_90_trace() {
        let mut surface = Surface::new(9, 5);
        let mut rng = StdRng::seed_from_u64(1);
        let mut eca = ElementaryAutomaton::new(ElementaryRule::from(90), InitialStateType::SingleCell);

        assert_eq!(eca.initialize(&mut surface, &mut rng), 1);
        assert_eq!(row_string(&surface, 0), "....#....");

        assert_eq!(eca.step(&mut surface, StepStrategy::Serial), Step::Advanced { population: 2 });
        assert_eq!(row_string(&surface, 1), "...#.#...");

        assert_eq!(eca.step(&mut surface, StepStrategy::Serial), Step::Advanced { population: 2 });
        assert_eq!(row_string(&surface, 2), "..#...#..");

        assert_eq!(eca.step(&mut surface, StepStrategy::Serial), Step::Advanced { population: 4 });
        assert_eq!(row_string(&surface, 3), ".#.#.#.#.");

        // Earlier rows are left in place
        assert_eq!(row_string(&surface, 0), "....#....");
    }

    #[test]
    fn test_edges_wrap() {
        // Rule 2 copies the right neighbor: pattern 001 -> on
        let mut surface = Surface::new(4, 3);
        let mut rng = StdRng::seed_from_u64(1);
        let mut eca = ElementaryAutomaton::new(ElementaryRule::from(2), InitialStateType::SingleCell);
        eca.initialize(&mut surface, &mut rng);
        surface.front_mut().clear();
        surface.set(0, 0, Cell::Alive);

        eca.step(&mut surface, StepStrategy::Serial);
        assert_eq!(row_string(&surface, 1), "...#");
    }

    #[test]
    fn test_all_on_initial_row() {
        let mut surface = Surface::new(6, 3);
        let mut rng = StdRng::seed_from_u64(1);
        let mut eca = ElementaryAutomaton::new(ElementaryRule::from(0), InitialStateType::AllOn);
        assert_eq!(eca.initialize(&mut surface, &mut rng), 6);

        // Rule 0 kills everything
        assert_eq!(eca.step(&mut surface, StepStrategy::Serial), Step::Advanced { population: 0 });
    }

    #[test]
    fn test_stops_at_bottom_row() {
        let mut surface = Surface::new(5, 3);
        let mut rng = StdRng::seed_from_u64(1);
        let mut eca = ElementaryAutomaton::new(ElementaryRule::default(), InitialStateType::SingleCell);
        eca.initialize(&mut surface, &mut rng);

        assert!(matches!(eca.step(&mut surface, StepStrategy::Serial), Step::Advanced { .. }));
        assert!(matches!(eca.step(&mut surface, StepStrategy::Serial), Step::Advanced { .. }));
        assert!(eca.has_finished());
        assert_eq!(eca.step(&mut surface, StepStrategy::Serial), Step::Halted);
        assert_eq!(eca.current_row(), 2);
    }

    #[test]
    fn test_random_row_is_seeded() {
        let mut a = Surface::new(64, 2);
        let mut b = Surface::new(64, 2);
        let rule = ElementaryRule::from(30);
        ElementaryAutomaton::new(rule, InitialStateType::Random).initialize(&mut a, &mut StdRng::seed_from_u64(7));
        ElementaryAutomaton::new(rule, InitialStateType::Random).initialize(&mut b, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.front(), b.front());
    }

    #[test]
    fn test_initial_state_codes() {
        assert_eq!(InitialStateType::try_from(1), Ok(InitialStateType::Random));
        assert_eq!(InitialStateType::try_from(3), Err(EngineError::UnknownInitialState(3)));
    }
}
