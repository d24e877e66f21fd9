//! Generation constants
//!
//! Defaults match the layout the generator was first tuned on.

/// Default grid dimensions
pub const DEFAULT_WIDTH: usize = 8;
pub const DEFAULT_HEIGHT: usize = 8;

/// Largest width or height; cells are addressed with `i32` coordinates
pub const MAX_DIMENSION: usize = i32::MAX as usize;

/// Default maximum number of rooms, Start included
pub const DEFAULT_ROOM_CAP: usize = 20;

/// Door count limits for a freshly generated room
pub const MIN_DOORS: u32 = 1;
pub const MAX_DOORS: u32 = 4;

/// Percentage scale used by the acceptance roll
pub const PERCENT: f64 = 100.0;
