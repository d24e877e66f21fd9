//! Room doors

use crate::coord::Coord;
use crate::direction::Direction;

/// A directional connector owned by a single room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Door {
    direction: Direction,
    active: bool,
}

impl Door {
    /// Create an inactive door
    pub const fn new(direction: Direction) -> Self {
        Self {
            direction,
            active: false,
        }
    }

    /// Create a door that is already open
    pub const fn open(direction: Direction) -> Self {
        Self {
            direction,
            active: true,
        }
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Offset from the owning room to the cell this door leads to
    pub const fn offset(&self) -> Coord {
        self.direction.offset()
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
