//! Machine-readable summary of a generated dungeon.

use nozoki_core::{Dungeon, GenerationReport, TileKind, TilePos};
use serde::Serialize;

use crate::{ascii, format_fingerprint};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DungeonDump {
    pub seed: u64,
    pub fingerprint: String,
    pub width: usize,
    pub height: usize,
    pub tile_size: usize,
    pub player_spawn: TilePos,
    pub enemy_spawns: usize,
    pub report: GenerationReport,
    pub rows: Vec<String>,
}

impl DungeonDump {
    pub fn new(seed: u64, dungeon: &Dungeon) -> Self {
        let grid = &dungeon.grid;
        Self {
            seed,
            fingerprint: format_fingerprint(grid.fingerprint()),
            width: grid.width(),
            height: grid.height(),
            tile_size: grid.tile_size(),
            player_spawn: dungeon.player_spawn,
            enemy_spawns: grid.count(TileKind::EnemySpawn),
            report: dungeon.report,
            rows: ascii::render_rows(grid),
        }
    }
}

#[cfg(test)]
mod tests {
    use nozoki_core::DungeonConfig;
    use nozoki_core::mapgen::generate_dungeon;

    use super::*;

    #[test]
    fn dump_describes_the_dungeon() {
        let dungeon = generate_dungeon(DungeonConfig::default(), 9).expect("valid config");
        let dump = DungeonDump::new(9, &dungeon);

        assert_eq!(dump.seed, 9);
        assert_eq!(dump.fingerprint.len(), 18);
        assert!(dump.fingerprint.starts_with("0x"));
        assert_eq!(dump.rows.len(), 64);
        assert_eq!(dump.rows[32].chars().nth(32), Some('@'));

        let json = serde_json::to_value(&dump).expect("serialize");
        assert_eq!(json["player_spawn"]["x"], 32);
        assert_eq!(json["report"]["rooms_carved"], dungeon.report.rooms_carved);
    }
}
