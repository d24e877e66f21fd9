//! dungen-core: Dungeon layout generation
//!
//! This crate decides which cells of a fixed-size grid hold rooms, which
//! compass doors connect them, and which rooms are the entry (Start) and
//! terminal (End) points. It performs no I/O and holds no global state:
//! all randomness flows through an explicit [`DungeonRng`].
//!
//! ```
//! use dungen_core::{generate, GeneratorConfig};
//!
//! let config = GeneratorConfig::default().with_seed(7);
//! let grid = generate(&config).unwrap();
//! assert!(grid.start_room().is_some());
//! assert!(grid.room_count() <= config.room_cap);
//! ```

pub mod dungeon;

mod config;
mod consts;
mod coord;
mod direction;
mod error;
mod rng;

pub use config::{GeneratorConfig, ProbabilityAnchor, ProbabilityPolicy};
pub use consts::*;
pub use coord::{Bounds, Coord};
pub use direction::Direction;
pub use dungeon::{generate, generate_with_rng};
pub use error::{DungeonError, Result};
pub use rng::DungeonRng;
