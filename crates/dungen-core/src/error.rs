//! Error types for dungeon generation
//!
//! Every variant is a pre-condition violation caught before the grid is
//! mutated. Rejecting a candidate room by probability is not an error.

use thiserror::Error;

use crate::coord::Coord;
use crate::dungeon::RoomRole;

/// Errors surfaced by the grid and the generator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DungeonError {
    #[error("invalid grid size {width}x{height}: each side must be positive and fit an i32 coordinate")]
    InvalidSize { width: usize, height: usize },

    #[error("invalid room cap {0}: at least one room is required")]
    InvalidRoomCap(usize),

    #[error("invalid probability policy: {0}")]
    InvalidPolicy(String),

    #[error("a {0} room is already assigned")]
    DuplicateRole(RoomRole),

    #[error("room at {coord} is a {role} room and cannot change role")]
    RoleConflict { coord: Coord, role: RoomRole },

    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(Coord),

    #[error("cell {0} already holds a room")]
    Occupied(Coord),

    #[error("cell {0} holds no room")]
    EmptyCell(Coord),
}

pub type Result<T> = core::result::Result<T, DungeonError>;
