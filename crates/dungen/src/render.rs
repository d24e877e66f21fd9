//! Plain-text dump of a generated grid
//!
//! Each room prints as `[x-y<role>(<doors>)]`, with door initials in
//! W, N, S, E order. Empty cells are blank, padded to the widest room.

use dungen_core::Direction;
use dungen_core::dungeon::{DungeonGrid, Room};

/// Door initials in reading order around the room
const DOOR_ORDER: [Direction; 4] = [
    Direction::West,
    Direction::North,
    Direction::South,
    Direction::East,
];

pub fn room_label(room: &Room) -> String {
    let position = room.position();
    let doors: String = DOOR_ORDER
        .iter()
        .filter(|&&direction| room.has_active_door(direction))
        .map(|direction| direction.initial())
        .collect();
    format!(
        "[{}-{}{}({})]",
        position.x,
        position.y,
        room.role().initial(),
        doors
    )
}

pub fn grid_dump(grid: &DungeonGrid) -> String {
    let width = grid.rooms().map(|room| room_label(room).len()).max().unwrap_or(0);

    let mut out = String::new();
    for row in grid.rows() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                let label = cell.as_ref().map(room_label).unwrap_or_default();
                format!("{label:width$}")
            })
            .collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }
    out
}

pub fn summary(grid: &DungeonGrid, seed: u64) -> String {
    let describe = |room: Option<&Room>| {
        room.map(|room| room.position().to_string())
            .unwrap_or_else(|| "none".to_string())
    };
    format!(
        "{} rooms on {}x{}, start {}, end {}, seed {}",
        grid.room_count(),
        grid.width(),
        grid.height(),
        describe(grid.start_room()),
        describe(grid.end_room()),
        seed
    )
}
