//! Recursive branch carving: a spawn room plus trees of hallway/room pairs.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use tracing::{debug, trace};

use crate::grid::TileGrid;
use crate::spatial::is_square_empty;
use crate::types::{Direction, TileKind};

use super::config::{ConfigError, DungeonConfig};
use super::furnish::RoomFurnisher;
use super::model::{Dungeon, GenerationReport};
use super::random::{pick, uniform_inclusive};
use super::room::{RoomRect, plan_branch};

pub struct DungeonGenerator {
    config: DungeonConfig,
    rng: ChaCha8Rng,
    furnisher: RoomFurnisher,
    report: GenerationReport,
}

impl DungeonGenerator {
    pub fn new(config: DungeonConfig, rng: ChaCha8Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        let furnisher = RoomFurnisher::new(config.max_enemy_spawns_per_room);
        Ok(Self { config, rng, furnisher, report: GenerationReport::default() })
    }

    pub fn from_seed(config: DungeonConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// Counters accumulated since the last call to [`DungeonGenerator::generate`].
    pub fn report(&self) -> GenerationReport {
        self.report
    }

    pub fn generate(&mut self) -> Dungeon {
        self.report = GenerationReport::default();
        let mut grid = TileGrid::new(self.config.width, self.config.height, self.config.tile_size);

        let spawn_room = self.config.spawn_room;
        grid.fill_rect(
            TileKind::Floor,
            spawn_room.x,
            spawn_room.y,
            spawn_room.width,
            spawn_room.height,
        );
        let player_spawn = spawn_room.center();
        grid.set(player_spawn.x, player_spawn.y, TileKind::PlayerSpawn);

        for pass in 0..self.config.branch_passes {
            let last_room = self.carve_branch(&mut grid, spawn_room, self.config.branch_depth);
            trace!(pass, ?last_room, "branch pass finished");
        }

        debug!(
            rooms = self.report.rooms_carved,
            calls = self.report.branch_calls,
            edge_terminations = self.report.edge_terminations,
            collision_retries = self.report.collision_retries,
            "dungeon generated"
        );
        Dungeon { grid, player_spawn, report: self.report }
    }

    /// Grows one branch out of `room` and returns the room the main line ended in.
    ///
    /// A candidate that leaves the map ends the branch at `room`. A candidate
    /// that overlaps carved tiles retries from the same `room` with one less
    /// depth. After a commit the new room seeds a side branch (its end is
    /// dropped) and then the main line, whose end is returned.
    ///
    /// Retries and the main line continue in place; only side branches recurse,
    /// and each of those starts from a freshly carved room.
    pub fn carve_branch(
        &mut self,
        grid: &mut TileGrid,
        mut room: RoomRect,
        mut depth: u32,
    ) -> RoomRect {
        loop {
            self.report.branch_calls += 1;
            if depth == 0 {
                return room;
            }

            let direction = pick(&mut self.rng, &Direction::ALL);
            let max_side_depth = self.config.max_side_branch_depth as usize;
            let side_depth = uniform_inclusive(&mut self.rng, 0, max_side_depth) as u32;

            let plan = plan_branch(
                room,
                direction,
                self.config.hallway_width,
                self.config.hallway_length,
                self.config.room_size(),
            );
            let (Some(hallway), Some(next_room)) =
                (plan.hallway.on_grid(grid), plan.room.on_grid(grid))
            else {
                self.report.edge_terminations += 1;
                trace!(?room, ?direction, depth, "branch reached the map edge");
                return room;
            };

            depth -= 1;
            if !is_empty(grid, hallway) || !is_empty(grid, next_room) {
                self.report.collision_retries += 1;
                trace!(?room, ?direction, depth, "branch collided, retrying with less depth");
                continue;
            }

            fill(grid, hallway);
            fill(grid, next_room);
            self.report.rooms_carved += 1;
            debug!(?direction, x = next_room.x, y = next_room.y, depth, side_depth, "carved room");

            let draws = self.furnisher.furnish(grid, next_room, &mut self.rng);
            self.report.spawn_draws += draws as u64;

            let _side_end = self.carve_branch(grid, next_room, side_depth);
            room = next_room;
        }
    }
}

fn is_empty(grid: &TileGrid, rect: RoomRect) -> bool {
    is_square_empty(grid, rect.x, rect.y, rect.width, rect.height)
}

fn fill(grid: &mut TileGrid, rect: RoomRect) {
    grid.fill_rect(TileKind::Floor, rect.x, rect.y, rect.width, rect.height);
}
