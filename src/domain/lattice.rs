//! Neighbor geometry of the three lattices the boolean automata run on.
//!
//! All lattices are stored on the same rectangular [`Grid`]:
//!
//! - square: one cell per grid position.
//! - hexagonal: pointy-top hexes in "odd-r" offset layout, odd rows are
//!   shifted half a cell to the right.
//! - triangular: position `(x, y)` is an upward triangle when `x + y` is
//!   even and a downward one otherwise.
//!
//! Neighbor lookups wrap around the grid edges when the cells meeting
//! across that edge fit together: hex rows need an even height, triangles
//! an even width and height. Across any other edge a lookup sees the
//! background color. Every neighbor set is a symmetric relation.

use super::{Cell, Grid, Neighborhood};

type Offsets = &'static [(isize, isize)];

const SQUARE_VON_NEUMANN: Offsets = &[(0, -1), (-1, 0), (1, 0), (0, 1)];

const SQUARE_MOORE: Offsets = &[
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const HEX_EVEN_ROW: Offsets = &[(-1, 0), (1, 0), (-1, -1), (0, -1), (-1, 1), (0, 1)];
const HEX_ODD_ROW: Offsets = &[(-1, 0), (1, 0), (0, -1), (1, -1), (0, 1), (1, 1)];

// Edge neighbors: the two side triangles and the one across the base
const TRI_UP_EDGES: Offsets = &[(-1, 0), (1, 0), (0, 1)];
const TRI_DOWN_EDGES: Offsets = &[(-1, 0), (1, 0), (0, -1)];

// Edge neighbors, the next triangles along the row, the facing triangle
// at the apex and the two facing triangles at the base corners
const TRI_UP_VERTICES: Offsets = &[
    (-1, 0),
    (1, 0),
    (0, 1),
    (-2, 0),
    (2, 0),
    (0, -1),
    (-2, 1),
    (2, 1),
];
const TRI_DOWN_VERTICES: Offsets = &[
    (-1, 0),
    (1, 0),
    (0, -1),
    (-2, 0),
    (2, 0),
    (0, 1),
    (-2, -1),
    (2, -1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lattice {
    Square,
    Hexagonal,
    Triangular,
}

impl Lattice {
    /// Relative positions of the neighbors of (x, y)
    pub fn offsets(self, neighborhood: Neighborhood, x: usize, y: usize) -> Offsets {
        match (self, neighborhood) {
            (Lattice::Square, Neighborhood::VonNeumann) => SQUARE_VON_NEUMANN,
            (Lattice::Square, Neighborhood::Moore) => SQUARE_MOORE,
            // Hexes have a single natural neighborhood
            (Lattice::Hexagonal, _) if y % 2 == 0 => HEX_EVEN_ROW,
            (Lattice::Hexagonal, _) => HEX_ODD_ROW,
            (Lattice::Triangular, Neighborhood::VonNeumann) if is_up_triangle(x, y) => TRI_UP_EDGES,
            (Lattice::Triangular, Neighborhood::VonNeumann) => TRI_DOWN_EDGES,
            (Lattice::Triangular, Neighborhood::Moore) if is_up_triangle(x, y) => TRI_UP_VERTICES,
            (Lattice::Triangular, Neighborhood::Moore) => TRI_DOWN_VERTICES,
        }
    }

    /// Neighborhood whose thresholds drive this lattice.
    /// Hex lattices always read the Moore slots.
    pub fn rule_slots(self, requested: Neighborhood) -> Neighborhood {
        match self {
            Lattice::Hexagonal => Neighborhood::Moore,
            _ => requested,
        }
    }

    /// Whether lookups wrap across the (left/right, top/bottom) edges of a
    /// `width` x `height` grid
    pub const fn wraps(self, width: usize, height: usize) -> (bool, bool) {
        match self {
            Lattice::Square => (true, true),
            // Odd-r rows alternate, so rows 0 and h-1 must differ in parity
            Lattice::Hexagonal => (true, height % 2 == 0),
            Lattice::Triangular => (width % 2 == 0, height % 2 == 0),
        }
    }

    /// Cell at offset (dx, dy) from (x, y)
    fn neighbor(self, grid: &Grid, x: usize, y: usize, dx: isize, dy: isize) -> Cell {
        let (width, height) = grid.dimensions();
        let (nx, ny) = (x as isize + dx, y as isize + dy);
        let (wrap_x, wrap_y) = self.wraps(width, height);
        let off_x = nx < 0 || nx >= width as isize;
        let off_y = ny < 0 || ny >= height as isize;
        if (off_x && !wrap_x) || (off_y && !wrap_y) {
            return Cell::Dead;
        }
        grid.get_wrapped(nx, ny)
    }

    /// Count neighbors of (x, y) holding the foreground color
    pub fn count_alive(self, grid: &Grid, neighborhood: Neighborhood, x: usize, y: usize) -> u8 {
        self.offsets(neighborhood, x, y)
            .iter()
            .filter(|&&(dx, dy)| self.neighbor(grid, x, y, dx, dy).is_alive())
            .count() as u8
    }

    /// True if any neighbor of (x, y) equals `target`
    pub fn any_neighbor(
        self,
        grid: &Grid,
        neighborhood: Neighborhood,
        x: usize,
        y: usize,
        target: Cell,
    ) -> bool {
        self.offsets(neighborhood, x, y)
            .iter()
            .any(|&(dx, dy)| self.neighbor(grid, x, y, dx, dy) == target)
    }
}

pub const fn is_up_triangle(x: usize, y: usize) -> bool {
    (x + y) % 2 == 0
}
