//! Double-buffered cell surface.
//!
//! The front buffer holds the current generation and is what gets displayed.
//! The back buffer is scratch space for the next generation: generation steps
//! read only the front buffer, write only the back buffer, then swap the two,
//! so no cell ever observes a partially updated generation.

use super::{Cell, Grid};

/// How a full-surface update is scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepStrategy {
    /// Rows processed one after another
    Serial,
    /// Rows processed on the rayon thread pool
    #[default]
    Parallel,
}

impl StepStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "Serial",
            StepStrategy::Parallel => "Parallel",
        }
    }
}

/// Names one of the two buffers of a [`Surface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Buffer {
    /// Current generation
    #[default]
    Primary,
    /// Scratch buffer; holds the previous generation after a step
    Secondary,
}

impl Buffer {
    pub fn other(self) -> Self {
        match self {
            Buffer::Primary => Buffer::Secondary,
            Buffer::Secondary => Buffer::Primary,
        }
    }
}

pub struct Surface {
    front: Grid,
    back: Grid,
    shown: Buffer,
}

impl Surface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            front: Grid::new(width, height),
            back: Grid::new(width, height),
            shown: Buffer::Primary,
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.front.dimensions()
    }

    /// Number of cells in one buffer
    pub const fn area(&self) -> usize {
        self.front.len()
    }

    /// Current generation
    pub fn front(&self) -> &Grid {
        &self.front
    }

    pub fn front_mut(&mut self) -> &mut Grid {
        &mut self.front
    }

    pub fn buffer(&self, buffer: Buffer) -> &Grid {
        match buffer {
            Buffer::Primary => &self.front,
            Buffer::Secondary => &self.back,
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.front.get(x, y)
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.front.set(x, y, cell);
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, cell: Cell) {
        self.front.fill_rect(x, y, width, height, cell);
    }

    /// Reset one buffer to the background color
    pub fn clear(&mut self, buffer: Buffer) {
        match buffer {
            Buffer::Primary => self.front.clear(),
            Buffer::Secondary => self.back.clear(),
        }
    }

    pub fn clear_all(&mut self) {
        self.front.clear();
        self.back.clear();
    }

    /// Select the buffer the display reads from
    pub fn present(&mut self, buffer: Buffer) {
        self.shown = buffer;
    }

    /// Buffer the display reads from
    pub fn presented(&self) -> Buffer {
        self.shown
    }

    pub fn shown(&self) -> &Grid {
        self.buffer(self.shown)
    }

    /// Compute the next generation from the current one.
    ///
    /// `next` sees the untouched current generation and returns the new
    /// value for one position; results land in the back buffer, which then
    /// becomes the front buffer.
    pub fn advance_generation<F>(&mut self, strategy: StepStrategy, next: F)
    where
        F: Fn(&Grid, usize, usize) -> Cell + Sync,
    {
        let snapshot = &self.front;
        self.back.fill_with(strategy, |x, y| next(snapshot, x, y));
        std::mem::swap(&mut self.front, &mut self.back);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_reads_snapshot_only() {
        let mut surface = Surface::new(5, 1);
        surface.set(0, 0, Cell::Alive);

        // Shift right: reading a partially updated buffer would smear the
        // cell across the whole row.
        surface.advance_generation(StepStrategy::Serial, |grid, x, y| {
            grid.get_wrapped(x as isize - 1, y as isize)
        });

        assert_eq!(surface.front().count_alive(), 1);
        assert_eq!(surface.get(1, 0), Some(Cell::Alive));
    }

    #[test]
    fn test_advance_keeps_previous_generation_in_back_buffer() {
        let mut surface = Surface::new(3, 3);
        surface.set(1, 1, Cell::Alive);
        surface.advance_generation(StepStrategy::Parallel, |_, _, _| Cell::Dead);

        assert_eq!(surface.front().count_alive(), 0);
        assert_eq!(surface.buffer(Buffer::Secondary).count_alive(), 1);
    }

    #[test]
    fn test_clear_and_present() {
        let mut surface = Surface::new(4, 4);
        surface.fill_rect(0, 0, 2, 2, Cell::Alive);
        surface.present(Buffer::Secondary);
        assert_eq!(surface.shown().count_alive(), 0);

        surface.present(Buffer::Primary);
        assert_eq!(surface.shown().count_alive(), 4);

        surface.clear(Buffer::Primary);
        assert_eq!(surface.front().count_alive(), 0);
    }

    #[test]
    fn test_empty_surface_does_not_panic() {
        let mut surface = Surface::new(0, 0);
        surface.advance_generation(StepStrategy::Parallel, |_, _, _| Cell::Alive);
        assert_eq!(surface.area(), 0);
    }
}
