//! Grid coordinates and extents

use core::fmt;
use core::ops::{Add, Sub};

use crate::consts::MAX_DIMENSION;
use crate::error::{DungeonError, Result};

/// Integer grid point, also used for direction offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean length of this point seen as a vector
    pub fn magnitude(self) -> f64 {
        f64::from(self.x).hypot(f64::from(self.y))
    }

    /// Euclidean distance between two cells
    pub fn distance_to(self, other: Coord) -> f64 {
        (self - other).magnitude()
    }

    /// Distance from this cell to an arbitrary (possibly fractional) point
    pub fn distance_to_point(self, (px, py): (f64, f64)) -> f64 {
        (f64::from(self.x) - px).hypot(f64::from(self.y) - py)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Extents of a grid: valid cells are `0..width` by `0..height`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub width: usize,
    pub height: usize,
}

impl Bounds {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Extents a grid can be built on.
    ///
    /// Both sides must lie in `1..=MAX_DIMENSION` so every cell is
    /// addressable by a [`Coord`], and the cell count must fit in `usize`.
    pub fn checked(width: usize, height: usize) -> Result<Self> {
        let fits = |side: usize| (1..=MAX_DIMENSION).contains(&side);
        if !fits(width) || !fits(height) || width.checked_mul(height).is_none() {
            return Err(DungeonError::InvalidSize { width, height });
        }
        Ok(Self::new(width, height))
    }

    /// Check if a cell lies inside the grid
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Number of cells
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Length of the full grid diagonal
    pub fn diagonal(&self) -> f64 {
        (self.width as f64).hypot(self.height as f64)
    }

    /// Geometric center, `(width / 2, height / 2)`
    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Row-major index of an in-bounds cell
    pub(crate) fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.y as usize * self.width + coord.x as usize)
    }
}
