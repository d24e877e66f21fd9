//! Dungeon grid: fixed-size matrix of optional rooms

use crate::coord::{Bounds, Coord};
use crate::direction::Direction;
use crate::error::{DungeonError, Result};

use super::room::{Room, RoomRole};

/// Fixed `width x height` container owning every room of a dungeon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonGrid {
    bounds: Bounds,
    /// Row-major cells, `y * width + x`
    cells: Vec<Option<Room>>,
    start: Option<Coord>,
    end: Option<Coord>,
}

impl DungeonGrid {
    /// Create an empty grid
    ///
    /// Fails with [`DungeonError::InvalidSize`] for sizes [`Bounds::checked`]
    /// rejects, or when the cell storage cannot be allocated.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let bounds = Bounds::checked(width, height)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(bounds.area())
            .map_err(|_| DungeonError::InvalidSize { width, height })?;
        cells.resize(bounds.area(), None);

        Ok(Self {
            bounds,
            cells,
            start: None,
            end: None,
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> usize {
        self.bounds.width
    }

    pub fn height(&self) -> usize {
        self.bounds.height
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.bounds.contains(coord)
    }

    fn index(&self, coord: Coord) -> Result<usize> {
        self.bounds
            .index_of(coord)
            .ok_or(DungeonError::OutOfBounds(coord))
    }

    /// Room at `coord`, erroring when the coordinate is off-grid
    pub fn room_at(&self, coord: Coord) -> Result<Option<&Room>> {
        let index = self.index(coord)?;
        Ok(self.cells[index].as_ref())
    }

    pub(crate) fn room_at_mut(&mut self, coord: Coord) -> Result<Option<&mut Room>> {
        let index = self.index(coord)?;
        Ok(self.cells[index].as_mut())
    }

    /// Check if a room exists at `coord` (false off-grid)
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.bounds
            .index_of(coord)
            .is_some_and(|index| self.cells[index].is_some())
    }

    /// Create a room in an empty cell.
    ///
    /// Start and End rooms are recorded; assigning either a second time
    /// fails with [`DungeonError::DuplicateRole`] before anything changes.
    pub fn place_room(&mut self, coord: Coord, role: RoomRole) -> Result<&mut Room> {
        let index = self.index(coord)?;
        if self.cells[index].is_some() {
            return Err(DungeonError::Occupied(coord));
        }

        match role {
            RoomRole::Start if self.start.is_some() => {
                return Err(DungeonError::DuplicateRole(role));
            }
            RoomRole::End if self.end.is_some() => {
                return Err(DungeonError::DuplicateRole(role));
            }
            RoomRole::Start => self.start = Some(coord),
            RoomRole::End => self.end = Some(coord),
            RoomRole::Normal => {}
        }

        Ok(self.cells[index].insert(Room::new(coord, role)))
    }

    /// Promote the Normal room at `coord` to the End room
    pub fn promote_to_end(&mut self, coord: Coord) -> Result<()> {
        if self.end.is_some() {
            return Err(DungeonError::DuplicateRole(RoomRole::End));
        }
        let room = self
            .room_at_mut(coord)?
            .ok_or(DungeonError::EmptyCell(coord))?;
        if room.role() != RoomRole::Normal {
            return Err(DungeonError::RoleConflict {
                coord,
                role: room.role(),
            });
        }
        room.promote_to_end();
        self.end = Some(coord);
        Ok(())
    }

    pub fn start_room(&self) -> Option<&Room> {
        self.start.and_then(|coord| self.room_at(coord).ok().flatten())
    }

    pub fn end_room(&self) -> Option<&Room> {
        self.end.and_then(|coord| self.room_at(coord).ok().flatten())
    }

    /// Placed rooms in row-major order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.cells.iter().flatten()
    }

    /// Rows from top (y = 0) to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Room>]> {
        self.cells.chunks(self.bounds.width)
    }

    pub fn room_count(&self) -> usize {
        self.rooms().count()
    }

    /// Room behind the active door of `room` in `direction`
    pub fn neighbor(&self, room: &Room, direction: Direction) -> Option<&Room> {
        let coord = room.neighbor_coordinate(direction)?;
        self.room_at(coord).ok().flatten()
    }
}
