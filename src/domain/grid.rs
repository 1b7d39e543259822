use super::{Cell, StepStrategy};
use rayon::prelude::*;

/// Grid is a fixed-size 2D array of palette cells, stored row-major.
/// It knows nothing about how it is displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell set to the background color
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.cells[self.get_index(x, y)])
    }

    /// Get cell at a signed position, wrapping around the edges like a torus
    pub fn get_wrapped(&self, x: isize, y: isize) -> Cell {
        if self.is_empty() {
            return Cell::Dead;
        }
        let nx = x.rem_euclid(self.width as isize) as usize;
        let ny = y.rem_euclid(self.height as isize) as usize;
        self.cells[self.get_index(nx, ny)]
    }

    /// Set cell at position, ignoring writes outside the grid
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if self.contains(x, y) {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Fill an axis-aligned rectangle, clipped to the grid
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, cell: Cell) {
        let end_x = x.saturating_add(width).min(self.width);
        let end_y = y.saturating_add(height).min(self.height);
        for row in y..end_y {
            for col in x..end_x {
                let idx = self.get_index(col, row);
                self.cells[idx] = cell;
            }
        }
    }

    /// Draw a horizontal run of `length` cells starting at (x, y)
    pub fn draw_hline(&mut self, x: usize, y: usize, length: usize, cell: Cell) {
        self.fill_rect(x, y, length, 1, cell);
    }

    /// Reset every cell to the background color
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Borrow one row of cells
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        (y < self.height).then(|| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Count cells matching a predicate
    pub fn count(&self, predicate: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|&&cell| predicate(cell)).count()
    }

    /// Count foreground cells
    pub fn count_alive(&self) -> usize {
        self.count(Cell::is_alive)
    }

    /// Assign every cell from a function of its position.
    /// Rows are processed in parallel when the strategy allows it.
    pub fn fill_with<F>(&mut self, strategy: StepStrategy, f: F)
    where
        F: Fn(usize, usize) -> Cell + Sync,
    {
        if self.is_empty() {
            return;
        }
        let width = self.width;
        let fill_row = |(y, row): (usize, &mut [Cell])| {
            row.iter_mut()
                .enumerate()
                .for_each(|(x, cell)| *cell = f(x, y));
        };
        match strategy {
            StepStrategy::Serial => self.cells.chunks_mut(width).enumerate().for_each(fill_row),
            StepStrategy::Parallel => self
                .cells
                .par_chunks_mut(width)
                .enumerate()
                .for_each(fill_row),
        }
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i % self.width, i / self.width, cell))
    }
}
