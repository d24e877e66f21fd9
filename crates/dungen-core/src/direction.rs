//! Compass directions for room doors

use strum::Display;

use crate::coord::Coord;

/// The four door directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

impl Direction {
    /// All directions, in door-slot order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Slot of this direction in a room's door array
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit offset to the neighboring cell
    pub const fn offset(self) -> Coord {
        match self {
            Direction::North => Coord::new(0, -1),
            Direction::South => Coord::new(0, 1),
            Direction::East => Coord::new(1, 0),
            Direction::West => Coord::new(-1, 0),
        }
    }

    /// The direction pointing back (its own inverse)
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Single-letter code (N/S/E/W)
    pub const fn initial(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }
}
