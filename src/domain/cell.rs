/// Cell is the palette entry stored at every position of the surface.
/// `Alive` is the foreground color and `Dead` the background; every liveness
/// test in the engine is an equality check against `Alive`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
    /// BML car moving towards +x
    EastCar,
    /// BML car moving towards -y
    NorthCar,
    /// Cyclic automaton state
    Cyclic(u8),
}

impl Cell {
    /// Check if the cell holds the foreground color
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Check if the cell holds a traffic car of either orientation
    pub const fn is_car(self) -> bool {
        matches!(self, Cell::EastCar | Cell::NorthCar)
    }

    /// Foreground becomes background, anything else becomes foreground
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            _ => Cell::Alive,
        }
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Cyclic state held by the cell, if any
    pub const fn cyclic_state(self) -> Option<u8> {
        match self {
            Cell::Cyclic(state) => Some(state),
            _ => None,
        }
    }
}
