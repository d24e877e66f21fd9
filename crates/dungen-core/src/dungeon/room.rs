//! Room roles and structures
//!
//! A room occupies one grid cell and owns up to four doors, one per
//! compass direction.

use strum::Display;

use crate::consts::{MAX_DOORS, MIN_DOORS};
use crate::coord::{Bounds, Coord};
use crate::direction::Direction;
use crate::rng::DungeonRng;

use super::door::Door;

/// Role of a room in the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum RoomRole {
    /// Entry point, exactly one per dungeon
    Start,
    /// Terminal dead-end room, at most one per dungeon
    End,
    #[default]
    Normal,
}

impl RoomRole {
    /// Single-letter code (S/E/N)
    pub const fn initial(self) -> char {
        match self {
            RoomRole::Start => 'S',
            RoomRole::End => 'E',
            RoomRole::Normal => 'N',
        }
    }
}

/// A single occupied grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    position: Coord,
    role: RoomRole,
    /// Door slots indexed by [`Direction::index`]
    doors: [Option<Door>; 4],
}

impl Room {
    /// Create a room with no doors
    pub fn new(position: Coord, role: RoomRole) -> Self {
        Self {
            position,
            role,
            doors: [None; 4],
        }
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn role(&self) -> RoomRole {
        self.role
    }

    pub fn is_start(&self) -> bool {
        self.role == RoomRole::Start
    }

    /// Roll a door set for a fresh room.
    ///
    /// Picks a target count in `1..=4`, then draws directions without
    /// replacement. A direction is discarded when its neighbor is off-grid
    /// or a door already exists there. Stops at the target count or when
    /// all four directions were tried, so fewer doors than the target is
    /// possible. Returns the number of doors opened.
    pub fn generate_doors(&mut self, rng: &mut DungeonRng, bounds: Bounds) -> usize {
        let wanted = rng.range(MIN_DOORS, MAX_DOORS) as usize;
        let mut candidates = Direction::ALL.to_vec();
        let mut opened = 0;

        while opened < wanted && !candidates.is_empty() {
            let pick = rng.rn2(candidates.len() as u32) as usize;
            let direction = candidates.remove(pick);

            if !bounds.contains(self.position + direction.offset())
                || self.doors[direction.index()].is_some()
            {
                continue;
            }

            self.doors[direction.index()] = Some(Door::open(direction));
            opened += 1;
        }

        opened
    }

    /// Open one random in-bounds direction.
    ///
    /// Used when [`Room::generate_doors`] opened nothing. Returns `None`
    /// only when the room has no in-bounds neighbor at all (1x1 grid).
    pub fn force_door(&mut self, rng: &mut DungeonRng, bounds: Bounds) -> Option<Direction> {
        let open: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|d| bounds.contains(self.position + d.offset()))
            .filter(|d| !self.has_active_door(*d))
            .collect();

        let direction = *rng.choose(&open)?;
        self.link_door(direction);
        Some(direction)
    }

    /// Ensure an active door exists in `direction`
    pub fn link_door(&mut self, direction: Direction) {
        self.doors[direction.index()]
            .get_or_insert(Door::new(direction))
            .activate();
    }

    pub(crate) fn deactivate_door(&mut self, direction: Direction) {
        if let Some(door) = self.doors[direction.index()].as_mut() {
            door.deactivate();
        }
    }

    pub(crate) fn promote_to_end(&mut self) {
        self.role = RoomRole::End;
    }

    /// Cell behind the active door in `direction`, if there is one
    pub fn neighbor_coordinate(&self, direction: Direction) -> Option<Coord> {
        self.has_active_door(direction)
            .then(|| self.position + direction.offset())
    }

    pub fn door(&self, direction: Direction) -> Option<&Door> {
        self.doors[direction.index()].as_ref()
    }

    pub fn has_active_door(&self, direction: Direction) -> bool {
        self.door(direction).is_some_and(Door::is_active)
    }

    /// All doors, active or not, in direction order
    pub fn doors(&self) -> impl Iterator<Item = &Door> {
        self.doors.iter().flatten()
    }

    pub fn active_doors(&self) -> impl Iterator<Item = &Door> {
        self.doors().filter(|door| door.is_active())
    }

    pub fn active_door_count(&self) -> usize {
        self.active_doors().count()
    }

    /// Directions of the active doors, in direction order
    pub fn active_directions(&self) -> Vec<Direction> {
        self.active_doors().map(Door::direction).collect()
    }

    /// Exactly one active door: a leaf of the room graph
    pub fn is_dead_end(&self) -> bool {
        self.active_door_count() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_at(x: i32, y: i32) -> Room {
        Room::new(Coord::new(x, y), RoomRole::Normal)
    }

    #[test]
    fn test_new_room_has_no_doors() {
        let room = Room::new(Coord::new(2, 3), RoomRole::Start);
        assert_eq!(room.doors().count(), 0);
        assert!(room.is_start());
        assert_eq!(room.position(), Coord::new(2, 3));
    }

    #[test]
    fn test_generate_doors_within_limits() {
        let bounds = Bounds::new(5, 5);
        for seed in 0..200 {
            let mut rng = DungeonRng::new(seed);
            let mut room = room_at(2, 2);
            let opened = room.generate_doors(&mut rng, bounds);
            assert!((1..=4).contains(&opened));
            assert_eq!(room.active_door_count(), opened);
        }
    }

    #[test]
    fn test_generate_doors_respects_bounds() {
        let bounds = Bounds::new(5, 5);
        for seed in 0..200 {
            let mut rng = DungeonRng::new(seed);
            let mut room = room_at(0, 0);
            room.generate_doors(&mut rng, bounds);
            assert!(room.door(Direction::North).is_none());
            assert!(room.door(Direction::West).is_none());
            for door in room.doors() {
                assert!(bounds.contains(room.position() + door.offset()));
            }
        }
    }

    #[test]
    fn test_generate_doors_on_single_cell() {
        let mut rng = DungeonRng::new(1);
        let mut room = room_at(0, 0);
        assert_eq!(room.generate_doors(&mut rng, Bounds::new(1, 1)), 0);
        assert_eq!(room.force_door(&mut rng, Bounds::new(1, 1)), None);
        assert_eq!(room.doors().count(), 0);
    }

    #[test]
    fn test_force_door_picks_in_bounds() {
        let bounds = Bounds::new(1, 2);
        let mut rng = DungeonRng::new(5);
        let mut room = room_at(0, 0);
        assert_eq!(room.force_door(&mut rng, bounds), Some(Direction::South));
        assert!(room.has_active_door(Direction::South));
    }

    #[test]
    fn test_link_door_is_idempotent() {
        let mut room = room_at(1, 1);
        room.link_door(Direction::East);
        room.link_door(Direction::East);
        assert_eq!(room.doors().count(), 1);
        assert!(room.has_active_door(Direction::East));

        room.deactivate_door(Direction::East);
        assert!(!room.has_active_door(Direction::East));
        room.link_door(Direction::East);
        assert!(room.has_active_door(Direction::East));
        assert_eq!(room.doors().count(), 1);
    }

    #[test]
    fn test_neighbor_coordinate() {
        let mut room = room_at(3, 3);
        assert_eq!(room.neighbor_coordinate(Direction::North), None);
        room.link_door(Direction::North);
        assert_eq!(room.neighbor_coordinate(Direction::North), Some(Coord::new(3, 2)));
        room.deactivate_door(Direction::North);
        assert_eq!(room.neighbor_coordinate(Direction::North), None);
    }

    #[test]
    fn test_dead_end_and_directions() {
        let mut room = room_at(1, 1);
        room.link_door(Direction::West);
        assert!(room.is_dead_end());
        room.link_door(Direction::North);
        assert!(!room.is_dead_end());
        assert_eq!(room.active_directions(), vec![Direction::North, Direction::West]);
    }

    #[test]
    fn test_promote_to_end() {
        let mut room = room_at(0, 0);
        room.promote_to_end();
        assert_eq!(room.role(), RoomRole::End);
        assert_eq!(RoomRole::End.initial(), 'E');
        assert_eq!(RoomRole::default(), RoomRole::Normal);
    }
}
