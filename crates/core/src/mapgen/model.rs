//! Public outputs of a generation run.

use serde::Serialize;

use crate::grid::TileGrid;
use crate::types::TilePos;

/// Counters describing how a generation run unfolded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub branch_calls: u64,
    pub rooms_carved: u64,
    pub edge_terminations: u64,
    pub collision_retries: u64,
    pub spawn_draws: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dungeon {
    pub grid: TileGrid,
    pub player_spawn: TilePos,
    pub report: GenerationReport,
}
