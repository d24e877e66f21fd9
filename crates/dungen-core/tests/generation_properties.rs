use dungen_core::dungeon::{DungeonGrid, RoomRole, is_connected, one_sided_doors};
use dungen_core::{
    Bounds, Coord, Direction, GeneratorConfig, ProbabilityAnchor, ProbabilityPolicy, generate,
};
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = GeneratorConfig> {
    (1usize..12, 1usize..12, 1usize..40, any::<u64>()).prop_map(|(width, height, cap, seed)| {
        GeneratorConfig::new(width, height, cap).with_seed(seed)
    })
}

fn policy_strategy() -> impl Strategy<Value = ProbabilityPolicy> {
    (
        prop_oneof![Just(ProbabilityAnchor::Start), Just(ProbabilityAnchor::Center)],
        -50.0f64..80.0,
        0.0f64..60.0,
        prop::option::of(60.0f64..150.0),
    )
        .prop_map(|(anchor, bonus, floor, ceiling)| ProbabilityPolicy {
            anchor,
            bonus,
            floor,
            ceiling,
        })
}

fn assert_active_doors_lead_to_rooms(grid: &DungeonGrid) {
    for room in grid.rooms() {
        for door in room.active_doors() {
            let target = room.position() + door.offset();
            assert!(grid.is_in_bounds(target), "door off-grid at {}", room.position());
            let neighbor = grid
                .room_at(target)
                .unwrap()
                .unwrap_or_else(|| panic!("door into empty cell {target}"));
            assert!(neighbor.has_active_door(door.direction().opposite()));
        }
    }
}

proptest! {
    #[test]
    fn prop_doors_are_bidirectional(config in config_strategy()) {
        let grid = generate(&config).unwrap();
        prop_assert!(one_sided_doors(&grid).is_empty());
        assert_active_doors_lead_to_rooms(&grid);
    }

    #[test]
    fn prop_door_count_in_range(config in config_strategy()) {
        let grid = generate(&config).unwrap();
        if grid.room_count() >= 2 {
            for room in grid.rooms() {
                let doors = room.active_door_count();
                prop_assert!((1..=4).contains(&doors), "{} doors at {}", doors, room.position());
            }
        }
    }

    #[test]
    fn prop_roles_are_unique(config in config_strategy()) {
        let grid = generate(&config).unwrap();
        let starts = grid.rooms().filter(|room| room.role() == RoomRole::Start).count();
        let ends: Vec<_> = grid.rooms().filter(|room| room.role() == RoomRole::End).collect();
        prop_assert_eq!(starts, 1);
        prop_assert!(ends.len() <= 1);
        if let Some(end) = ends.first() {
            prop_assert!(!end.is_start());
            prop_assert_eq!(end.active_door_count(), 1);
            prop_assert_eq!(grid.end_room().map(|room| room.position()), Some(end.position()));
        }
    }

    #[test]
    fn prop_room_cap_never_exceeded(config in config_strategy()) {
        let grid = generate(&config).unwrap();
        prop_assert!(grid.room_count() <= config.room_cap);
        prop_assert!(grid.room_count() >= 1);
    }

    #[test]
    fn prop_layout_is_connected(config in config_strategy()) {
        let grid = generate(&config).unwrap();
        prop_assert!(is_connected(&grid));
    }

    #[test]
    fn prop_generation_is_deterministic(config in config_strategy()) {
        let first = generate(&config).unwrap();
        let second = generate(&config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_custom_policies_keep_invariants(
        config in config_strategy(),
        policy in policy_strategy(),
    ) {
        let grid = generate(&config.with_policy(policy)).unwrap();
        prop_assert!(one_sided_doors(&grid).is_empty());
        prop_assert!(is_connected(&grid));
    }

    #[test]
    fn prop_rejection_keeps_only_start(config in config_strategy()) {
        let never = ProbabilityPolicy { ceiling: Some(0.0), ..ProbabilityPolicy::default() };
        let grid = generate(&config.with_policy(never)).unwrap();
        prop_assert_eq!(grid.room_count(), 1);
        prop_assert!(grid.end_room().is_none());
    }

    #[test]
    fn prop_acceptance_fills_cap_or_exhausts_doors(config in config_strategy()) {
        let always = ProbabilityPolicy { floor: 100.0, ..ProbabilityPolicy::default() };
        let grid = generate(&config.clone().with_policy(always)).unwrap();
        prop_assert!(is_connected(&grid));
        if grid.room_count() < config.room_cap {
            for room in grid.rooms() {
                for door in room.doors() {
                    prop_assert!(grid.is_occupied(room.position() + door.offset()));
                }
            }
        }
    }

    #[test]
    fn prop_probability_monotonic_in_distance(
        policy in policy_strategy(),
        width in 2usize..16,
        height in 2usize..16,
        points in prop::array::uniform6(0i32..16),
    ) {
        let bounds = Bounds::new(width, height);
        let clamp = |v: i32, max: usize| v.rem_euclid(max as i32);
        let start = Coord::new(clamp(points[0], width), clamp(points[1], height));
        let a = Coord::new(clamp(points[2], width), clamp(points[3], height));
        let b = Coord::new(clamp(points[4], width), clamp(points[5], height));

        let anchor_distance = |c: Coord| match policy.anchor {
            ProbabilityAnchor::Start => c.distance_to(start),
            ProbabilityAnchor::Center => c.distance_to_point(bounds.center()),
        };
        let (near, far) = if anchor_distance(a) <= anchor_distance(b) { (a, b) } else { (b, a) };

        let p_near = policy.probability(bounds, start, near);
        let p_far = policy.probability(bounds, start, far);
        prop_assert!(p_near >= p_far, "{} < {}", p_near, p_far);
    }
}

#[test]
fn test_four_by_four_is_fully_reachable() {
    let config = GeneratorConfig::new(4, 4, 20).with_seed(2024);
    let grid = generate(&config).unwrap();
    assert!(grid.room_count() >= 1);
    assert!(is_connected(&grid));
    assert_active_doors_lead_to_rooms(&grid);
}

#[test]
fn test_single_cell_dungeon() {
    for seed in 0..10 {
        let grid = generate(&GeneratorConfig::new(1, 1, 20).with_seed(seed)).unwrap();
        let start = grid.start_room().unwrap();
        assert_eq!(start.position(), Coord::new(0, 0));
        assert_eq!(start.active_door_count(), 0);
        assert!(Direction::ALL.iter().all(|&d| start.door(d).is_none()));
        assert!(grid.end_room().is_none());
    }
}

#[test]
fn test_centered_policy_fills_the_middle() {
    let config = GeneratorConfig::new(8, 8, 20)
        .with_seed(11)
        .with_policy(ProbabilityPolicy::centered());
    let grid = generate(&config).unwrap();
    assert!(is_connected(&grid));
    assert!(one_sided_doors(&grid).is_empty());
}

#[test]
fn test_different_seeds_vary() {
    let layouts: Vec<Vec<Coord>> = (0..20)
        .map(|seed| {
            let grid = generate(&GeneratorConfig::default().with_seed(seed)).unwrap();
            grid.rooms().map(|room| room.position()).collect()
        })
        .collect();
    assert!(layouts.iter().any(|layout| layout != &layouts[0]));
}
