//! Dungeon system
//!
//! Contains the room grid, rooms and their doors, the generator, and the
//! door validation pass.

mod door;
mod generation;
mod grid;
mod room;
mod validation;

pub use door::Door;
pub use generation::{generate, generate_with_rng};
pub use grid::DungeonGrid;
pub use room::{Room, RoomRole};
pub use validation::{is_connected, one_sided_doors, reachable_from_start, validate_doors};
