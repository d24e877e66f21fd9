//! Dungeon generation
//!
//! Runs four strictly sequential phases over a fresh grid:
//! 1. Place the Start room at a random cell
//! 2. Grow rooms depth-first through open doors, accepting each candidate
//!    with a distance-weighted probability
//! 3. Close one-sided doors
//! 4. Promote a random dead-end room to the End room

use crate::config::GeneratorConfig;
use crate::coord::Coord;
use crate::error::Result;
use crate::rng::DungeonRng;

use super::grid::DungeonGrid;
use super::room::RoomRole;
use super::validation::validate_doors;

/// Generate a dungeon, seeding the RNG from `config.seed` or from entropy
pub fn generate(config: &GeneratorConfig) -> Result<DungeonGrid> {
    let mut rng = match config.seed {
        Some(seed) => DungeonRng::new(seed),
        None => DungeonRng::from_entropy(),
    };
    generate_with_rng(config, &mut rng)
}

/// Generate a dungeon drawing every random decision from `rng`
pub fn generate_with_rng(config: &GeneratorConfig, rng: &mut DungeonRng) -> Result<DungeonGrid> {
    config.validate()?;
    let mut grid = DungeonGrid::new(config.width, config.height)?;

    let start = place_start_room(&mut grid, rng)?;
    let rooms = grow_rooms(&mut grid, config, rng, start)?;
    let closed = validate_doors(&mut grid);
    tracing::debug!(closed, "door validation finished");
    let end = select_end_room(&mut grid, rng)?;

    tracing::info!(
        width = config.width,
        height = config.height,
        rooms,
        seed = rng.seed(),
        start = %start,
        end = ?end,
        "dungeon generated"
    );
    Ok(grid)
}

/// Phase 1: place the Start room and make sure it has a way out
///
/// If growth places no neighbor, validation closes the forced door again and
/// the Start keeps it only as an inactive record.
fn place_start_room(grid: &mut DungeonGrid, rng: &mut DungeonRng) -> Result<Coord> {
    let bounds = grid.bounds();
    let coord = rng.random_coord(bounds);
    let room = grid.place_room(coord, RoomRole::Start)?;

    if room.generate_doors(rng, bounds) == 0 {
        match room.force_door(rng, bounds) {
            Some(direction) => {
                tracing::warn!(%coord, %direction, "start room had no doors, forced one open");
            }
            None => {
                tracing::warn!(%coord, "start room has no in-bounds neighbor");
            }
        }
    }

    tracing::debug!(%coord, doors = room.active_door_count(), "start room placed");
    Ok(coord)
}

/// Phase 2: depth-first growth from the Start room.
///
/// The most recently created room is expanded next, which favors long
/// branches over breadth-first sprawl. Returns the final room count, which
/// never exceeds `config.room_cap`.
fn grow_rooms(
    grid: &mut DungeonGrid,
    config: &GeneratorConfig,
    rng: &mut DungeonRng,
    start: Coord,
) -> Result<usize> {
    let bounds = grid.bounds();
    let mut stack = vec![start];
    let mut room_count = 1;

    while room_count < config.room_cap {
        let Some(current) = stack.pop() else {
            break;
        };
        let directions = match grid.room_at(current)? {
            Some(room) => room.active_directions(),
            None => continue,
        };

        for direction in directions {
            if room_count >= config.room_cap {
                break;
            }

            let candidate = current + direction.offset();
            if !grid.is_in_bounds(candidate) || grid.is_occupied(candidate) {
                continue;
            }

            let probability = config.policy.probability(bounds, start, candidate);
            if !rng.chance(probability) {
                tracing::trace!(%candidate, probability, "candidate rejected");
                continue;
            }

            let room = grid.place_room(candidate, RoomRole::Normal)?;
            if room.generate_doors(rng, bounds) == 0 {
                room.force_door(rng, bounds);
            }
            room.link_door(direction.opposite());
            stack.push(candidate);
            room_count += 1;
            tracing::trace!(%candidate, probability, "room placed");
        }
    }

    tracing::debug!(room_count, pending = stack.len(), "growth finished");
    Ok(room_count)
}

/// Phase 4: promote one dead-end room, chosen uniformly, to End.
///
/// Candidates are non-Start rooms with exactly one open door, collected in
/// row-major order. With no candidate the dungeon has no End room.
fn select_end_room(grid: &mut DungeonGrid, rng: &mut DungeonRng) -> Result<Option<Coord>> {
    let dead_ends: Vec<Coord> = grid
        .rooms()
        .filter(|room| !room.is_start() && room.is_dead_end())
        .map(|room| room.position())
        .collect();

    let Some(&coord) = rng.choose(&dead_ends) else {
        tracing::warn!(rooms = grid.room_count(), "no dead-end room, dungeon has no end room");
        return Ok(None);
    };

    grid.promote_to_end(coord)?;
    tracing::debug!(%coord, candidates = dead_ends.len(), "end room selected");
    Ok(Some(coord))
}
