//! Door consistency and connectivity checks
//!
//! Validation closes every door that is not matched by an open door on the
//! other side:
//! 1. Doors leading off-grid or into an empty cell
//! 2. Doors whose neighbor has no door, or a closed one, pointing back
//!
//! After it runs, an open door between two rooms is always two-sided.

use std::collections::VecDeque;

use crate::coord::Coord;
use crate::direction::Direction;

use super::grid::DungeonGrid;
use super::room::Room;

/// Check if the door of `room` in `direction` has an open counterpart
fn has_reciprocal(grid: &DungeonGrid, room: &Room, direction: Direction) -> bool {
    room.neighbor_coordinate(direction)
        .and_then(|coord| grid.room_at(coord).ok().flatten())
        .is_some_and(|neighbor| neighbor.has_active_door(direction.opposite()))
}

/// Every open door lacking an open counterpart, row-major then direction order
pub fn one_sided_doors(grid: &DungeonGrid) -> Vec<(Coord, Direction)> {
    grid.rooms()
        .flat_map(|room| {
            room.active_directions()
                .into_iter()
                .filter(|&direction| !has_reciprocal(grid, room, direction))
                .map(|direction| (room.position(), direction))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Close all one-sided doors and return how many were closed.
///
/// Doors are collected first and closed afterwards. A door that is open on
/// both sides is never collected, so closing in a second pass gives the
/// same result as closing room by room.
pub fn validate_doors(grid: &mut DungeonGrid) -> usize {
    let stale = one_sided_doors(grid);

    for &(coord, direction) in &stale {
        if let Ok(Some(room)) = grid.room_at_mut(coord) {
            room.deactivate_door(direction);
        }
    }

    stale.len()
}

/// Rooms reachable from the Start room through open doors, breadth-first
pub fn reachable_from_start(grid: &DungeonGrid) -> Vec<Coord> {
    let Some(start) = grid.start_room() else {
        return Vec::new();
    };

    let mut visited = vec![false; grid.bounds().area()];
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start]);
    if let Some(index) = grid.bounds().index_of(start.position()) {
        visited[index] = true;
    }

    while let Some(room) = queue.pop_front() {
        order.push(room.position());
        for direction in room.active_directions() {
            let Some(next) = grid.neighbor(room, direction) else {
                continue;
            };
            let Some(index) = grid.bounds().index_of(next.position()) else {
                continue;
            };
            if !visited[index] {
                visited[index] = true;
                queue.push_back(next);
            }
        }
    }

    order
}

/// Check if every placed room can be reached from the Start room
pub fn is_connected(grid: &DungeonGrid) -> bool {
    reachable_from_start(grid).len() == grid.room_count()
}
