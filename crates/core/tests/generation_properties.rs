use nozoki_core::mapgen::generate_dungeon;
use nozoki_core::spatial::is_inside_map;
use nozoki_core::{DungeonConfig, Rect, RoomRect, TileKind, TilePos};
use proptest::prelude::*;

fn passable_count(dungeon: &nozoki_core::Dungeon) -> usize {
    let grid = &dungeon.grid;
    grid.width() * grid.height() - grid.count(TileKind::None)
}

#[test]
fn default_scenario_matches_the_reference_layout() {
    let dungeon = generate_dungeon(DungeonConfig::default(), 1).expect("valid config");
    let grid = &dungeon.grid;

    assert_eq!((grid.width(), grid.height(), grid.tile_size()), (64, 64, 16));
    assert_eq!(grid.get(32, 32), TileKind::PlayerSpawn);
    assert_eq!(grid.find_first_tile_of_kind(TileKind::PlayerSpawn), Some(TilePos { x: 32, y: 32 }));
    assert!(is_inside_map(grid, &Rect::new(0.0, 0.0, 1024.0, 1024.0)));
    assert!(!is_inside_map(grid, &Rect::new(1020.0, 0.0, 16.0, 16.0)));

    // The spawn room itself is never overwritten.
    for y in 27..37 {
        for x in 27..37 {
            assert!(grid.get(x, y).is_passable(), "spawn room tile ({x}, {y}) was cleared");
        }
    }
}

#[test]
fn generation_terminates_for_large_depth_budgets() {
    for depth in [0_u32, 1, 10, 25, 50] {
        let config = DungeonConfig { branch_depth: depth, ..DungeonConfig::default() };
        let dungeon = generate_dungeon(config, u64::from(depth) * 31 + 7).expect("valid config");
        assert_eq!(dungeon.grid.count(TileKind::PlayerSpawn), 1, "depth={depth}");
    }
}

#[test]
fn narrow_map_branches_only_along_the_open_axis() {
    let config = DungeonConfig {
        width: 64,
        height: 10,
        spawn_room: RoomRect::new(27, 0, 10, 10),
        ..DungeonConfig::default()
    };
    let dungeon = generate_dungeon(config, 5).expect("valid config");
    assert_eq!(dungeon.grid.reachable_from(dungeon.player_spawn), passable_count(&dungeon));
    for x in 0..64 {
        for y in 0..10 {
            let tile = dungeon.grid.get(x, y);
            if tile.is_passable() && !(27..37).contains(&x) {
                assert!((1..9).contains(&y), "branch rooms stay vertically centred: ({x}, {y})");
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]
    #[test]
    fn generated_dungeons_keep_carved_tiles_connected(seed in any::<u64>()) {
        let dungeon = generate_dungeon(DungeonConfig::default(), seed).expect("valid config");
        prop_assert_eq!(
            dungeon.grid.reachable_from(dungeon.player_spawn),
            passable_count(&dungeon),
            "seed={} left a room detached from the spawn",
            seed
        );
    }

    #[test]
    fn generated_dungeons_have_exactly_one_player_spawn(
        seed in any::<u64>(),
        depth in 0_u32..12,
    ) {
        let config = DungeonConfig { branch_depth: depth, ..DungeonConfig::default() };
        let dungeon = generate_dungeon(config, seed).expect("valid config");
        prop_assert_eq!(dungeon.grid.count(TileKind::PlayerSpawn), 1);
        prop_assert_eq!(
            dungeon.grid.find_first_tile_of_kind(TileKind::PlayerSpawn),
            Some(dungeon.player_spawn)
        );
    }

    #[test]
    fn enemy_markers_only_appear_in_branch_rooms(seed in any::<u64>()) {
        let dungeon = generate_dungeon(DungeonConfig::default(), seed).expect("valid config");
        let spawn_room = DungeonConfig::default().spawn_room;
        let markers = dungeon.grid.count(TileKind::EnemySpawn) as u64;
        prop_assert!(markers <= dungeon.report.spawn_draws);
        prop_assert!(markers <= dungeon.report.rooms_carved * 5);
        for pos in dungeon.grid.positions_of(TileKind::EnemySpawn) {
            prop_assert!(!spawn_room.contains(pos));
        }
    }
}
