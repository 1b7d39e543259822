use super::{Cell, Grid};

/// Named Game of Life shape: foreground cells relative to its top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Build a pattern from text rows, `#` marking a foreground cell
    pub fn from_rows(name: &'static str, description: &'static str, rows: &[&str]) -> Self {
        let cells: Vec<(usize, usize)> = rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.chars()
                    .enumerate()
                    .filter(|&(_, c)| c == '#')
                    .map(move |(x, _)| (x, y))
            })
            .collect();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        Self {
            name,
            description,
            width,
            height: rows.len(),
            cells,
        }
    }

    /// Draw the pattern with its top-left corner at (x, y).
    /// Cells falling outside the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        for &(dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, Cell::Alive);
        }
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }
}

/// Where a seed puts its pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// One copy in the middle of the grid
    Centered,
    /// Copies every `spacing` cells starting at `origin`, for as long as the
    /// anchor stays `margin` cells short of the far edges
    Tiled {
        origin: (usize, usize),
        spacing: (usize, usize),
        margin: (usize, usize),
    },
}

/// A pattern plus a layout: one way of seeding a Life run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    pub name: &'static str,
    pub pattern: Pattern,
    pub layout: Layout,
}

impl Seed {
    pub fn new(name: &'static str, pattern: Pattern, layout: Layout) -> Self {
        Self { name, pattern, layout }
    }

    /// Top-left corners the pattern is drawn at on a `width` x `height` grid
    pub fn anchors(&self, width: usize, height: usize) -> Vec<(usize, usize)> {
        match self.layout {
            Layout::Centered => vec![(
                width.saturating_sub(self.pattern.width) / 2,
                height.saturating_sub(self.pattern.height) / 2,
            )],
            Layout::Tiled {
                origin: (ox, oy),
                spacing: (sx, sy),
                margin: (mx, my),
            } => {
                let xs: Vec<usize> = (ox..width.saturating_sub(mx)).step_by(sx.max(1)).collect();
                (oy..height.saturating_sub(my))
                    .step_by(sy.max(1))
                    .flat_map(|y| xs.iter().map(move |&x| (x, y)))
                    .collect()
            }
        }
    }

    /// Draw every copy onto the grid
    pub fn apply(&self, grid: &mut Grid) {
        let (width, height) = grid.dimensions();
        for (x, y) in self.anchors(width, height) {
            self.pattern.place_on(grid, x, y);
        }
    }
}

/// Pattern library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::from_rows("Glider", "Moves diagonally (period 4)", &[".#.", "..#", "###"])
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::from_rows(
            "Pulsar",
            "Oscillator (period 3)",
            &[
                "..###...###..",
                ".............",
                "#....#.#....#",
                "#....#.#....#",
                "#....#.#....#",
                "..###...###..",
                ".............",
                "..###...###..",
                "#....#.#....#",
                "#....#.#....#",
                "#....#.#....#",
                ".............",
                "..###...###..",
            ],
        )
    }

    /// Rows of 5, 3 and 5 that grow into a pulsar
    pub fn pulsar_seed() -> Pattern {
        Pattern::from_rows("Pulsar seed", "Evolves into a pulsar", &["#####", "", ".###.", "", "#####"])
    }

    /// A row of ten that grows into a pentadecathlon
    pub fn pentadecathlon_seed() -> Pattern {
        Pattern::from_rows("Pentadecathlon seed", "Evolves into a pentadecathlon (period 15)", &["##########"])
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::from_rows("LWSS", "Lightweight Spaceship (period 4)", &[".#..#", "#....", "#...#", "####."])
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::from_rows(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            &[
                "........................#...........",
                "......................#.#...........",
                "............##......##............##",
                "...........#...#....##............##",
                "##........#.....#...##..............",
                "##........#...#.##....#.#...........",
                "..........#.....#.......#...........",
                "...........#...#....................",
                "............##......................",
            ],
        )
    }

    /// F-pentomino (also known as the R-pentomino), a methuselah
    pub fn f_pentomino() -> Pattern {
        Pattern::from_rows("F-pentomino", "Methuselah - stabilizes at gen 1103", &[".##", "##.", ".#."])
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::from_rows("Acorn", "Methuselah - stabilizes at gen 5206", &[".#.....", "...#...", "##..###"])
    }

    /// Screen of pulsar seeds every 16 cells
    pub fn pulsar_field() -> Seed {
        Seed::new(
            "Pulsar field",
            pulsar_seed(),
            Layout::Tiled {
                origin: (12, 12),
                spacing: (16, 16),
                margin: (7, 7),
            },
        )
    }

    /// Screen of pentadecathlon seeds, 17 apart horizontally and 10 vertically
    pub fn pentadecathlon_field() -> Seed {
        Seed::new(
            "Pentadecathlon field",
            pentadecathlon_seed(),
            Layout::Tiled {
                origin: (11, 5),
                spacing: (17, 10),
                margin: (11, 1),
            },
        )
    }

    /// Seeds offered for Life runs, in selection order
    pub fn all_seeds() -> Vec<Seed> {
        vec![
            pulsar_field(),
            pentadecathlon_field(),
            Seed::new("F-pentomino", f_pentomino(), Layout::Centered),
            Seed::new("Acorn", acorn(), Layout::Centered),
            Seed::new("Glider gun", glider_gun(), Layout::Centered),
            Seed::new("Pulsar", pulsar(), Layout::Centered),
            Seed::new("Glider", glider(), Layout::Centered),
            Seed::new("LWSS", lwss(), Layout::Centered),
        ]
    }
}
