//! A finished dungeon populated with a player and patrolling enemies.
//! The grid is frozen here; entities only query it.

use slotmap::{SlotMap, new_key_type};
use thiserror::Error;
use tracing::debug;

use crate::entity::{Enemy, Entity, MoveInput, Player, StepContext};
use crate::grid::TileGrid;
use crate::mapgen::Dungeon;
use crate::types::{Direction, TileKind, TilePos, Vec2};

new_key_type! {
    pub struct EnemyId;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("grid has no player spawn tile")]
    MissingPlayerSpawn,
}

pub struct World {
    grid: TileGrid,
    player: Player,
    enemies: SlotMap<EnemyId, Enemy>,
    steps: u64,
}

impl World {
    /// Places the player on the first `PlayerSpawn` tile and an enemy on every `EnemySpawn` tile.
    pub fn new(grid: TileGrid) -> Result<Self, WorldError> {
        let spawn = grid
            .find_first_tile_of_kind(TileKind::PlayerSpawn)
            .ok_or(WorldError::MissingPlayerSpawn)?;
        Ok(Self::with_player_spawn(grid, spawn))
    }

    pub fn from_dungeon(dungeon: Dungeon) -> Self {
        Self::with_player_spawn(dungeon.grid, dungeon.player_spawn)
    }

    fn with_player_spawn(grid: TileGrid, spawn: TilePos) -> Self {
        let player = Player::new(grid.tile_world_origin(spawn));

        let mut enemies = SlotMap::with_key();
        for (index, pos) in grid.positions_of(TileKind::EnemySpawn).enumerate() {
            let facing = Direction::ALL[index % Direction::ALL.len()];
            enemies.insert(Enemy::new(grid.tile_world_origin(pos), facing));
        }
        debug!(x = spawn.x, y = spawn.y, enemies = enemies.len(), "world populated");

        Self { grid, player, enemies, steps: 0 }
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(id)
    }

    pub fn enemies(&self) -> impl Iterator<Item = (EnemyId, &Enemy)> + '_ {
        self.enemies.iter()
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn camera_center(&self) -> Vec2 {
        self.player.position()
    }

    /// Advances every entity by `delta_ms`: enemies first, then the player.
    pub fn step(&mut self, input: MoveInput, delta_ms: u32) {
        let ctx = StepContext { grid: &self.grid, delta_ms };
        for enemy in self.enemies.values_mut() {
            enemy.update(&ctx);
        }
        self.player.set_input(input);
        self.player.update(&ctx);
        self.steps += 1;
    }
}
