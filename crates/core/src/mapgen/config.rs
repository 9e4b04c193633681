//! Tunable generation constants and their validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::room::RoomRect;

/// Upper bound on tile count and on world extent per axis; world coordinates
/// stay exactly representable as `f32` below it.
pub const MAX_GRID_EXTENT: usize = 1 << 24;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must have non-zero size, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("tile size must be non-zero")]
    ZeroTileSize,
    #[error("{width}x{height} grid with tile size {tile_size} exceeds {limit} tiles or units")]
    GridTooLarge { width: usize, height: usize, tile_size: usize, limit: usize },
    #[error("{what} must have non-zero width and height")]
    EmptyRoom { what: &'static str },
    #[error("spawn room {room:?} does not fit inside the {width}x{height} grid")]
    SpawnRoomOutsideGrid { room: RoomRect, width: usize, height: usize },
    #[error("hallway must have non-zero width and length, got {width}x{length}")]
    EmptyHallway { width: usize, length: usize },
    #[error("{what} length {length} exceeds the {limit}-tile grid extent")]
    PieceLargerThanGrid { what: &'static str, length: usize, limit: usize },
    #[error("hallway width {hallway_width} is wider than the narrowest room side {narrowest_side}")]
    HallwayTooWide { hallway_width: usize, narrowest_side: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub width: usize,
    pub height: usize,
    pub tile_size: usize,
    pub spawn_room: RoomRect,
    pub room_width: usize,
    pub room_height: usize,
    pub hallway_width: usize,
    pub hallway_length: usize,
    /// Depth budget handed to each top-level branch pass.
    pub branch_depth: u32,
    pub branch_passes: u32,
    /// Side branches draw their depth from `[0, max_side_branch_depth]`.
    pub max_side_branch_depth: u32,
    /// Furnishing draws its marker count from `[0, max_enemy_spawns_per_room]`.
    pub max_enemy_spawns_per_room: u32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            tile_size: 16,
            spawn_room: RoomRect::new(27, 27, 10, 10),
            room_width: 8,
            room_height: 8,
            hallway_width: 2,
            hallway_length: 6,
            branch_depth: 6,
            branch_passes: 3,
            max_side_branch_depth: 5,
            max_enemy_spawns_per_room: 5,
        }
    }
}

impl DungeonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid { width: self.width, height: self.height });
        }
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        let within_limit = |value: Option<usize>| value.is_some_and(|v| v <= MAX_GRID_EXTENT);
        if !within_limit(self.width.checked_mul(self.height))
            || !within_limit(self.width.checked_mul(self.tile_size))
            || !within_limit(self.height.checked_mul(self.tile_size))
        {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
                tile_size: self.tile_size,
                limit: MAX_GRID_EXTENT,
            });
        }
        if self.spawn_room.width == 0 || self.spawn_room.height == 0 {
            return Err(ConfigError::EmptyRoom { what: "spawn room" });
        }
        if self.room_width == 0 || self.room_height == 0 {
            return Err(ConfigError::EmptyRoom { what: "branch room" });
        }
        let right = self.spawn_room.x.checked_add(self.spawn_room.width);
        let bottom = self.spawn_room.y.checked_add(self.spawn_room.height);
        if !right.is_some_and(|r| r <= self.width) || !bottom.is_some_and(|b| b <= self.height) {
            return Err(ConfigError::SpawnRoomOutsideGrid {
                room: self.spawn_room,
                width: self.width,
                height: self.height,
            });
        }
        if self.hallway_width == 0 || self.hallway_length == 0 {
            return Err(ConfigError::EmptyHallway {
                width: self.hallway_width,
                length: self.hallway_length,
            });
        }
        let pieces = [
            ("branch room width", self.room_width, self.width),
            ("branch room height", self.room_height, self.height),
            ("hallway", self.hallway_length, self.width.max(self.height)),
        ];
        for (what, length, limit) in pieces {
            if length > limit {
                return Err(ConfigError::PieceLargerThanGrid { what, length, limit });
            }
        }
        let narrowest_side = self
            .room_width
            .min(self.room_height)
            .min(self.spawn_room.width)
            .min(self.spawn_room.height);
        if self.hallway_width > narrowest_side {
            return Err(ConfigError::HallwayTooWide {
                hallway_width: self.hallway_width,
                narrowest_side,
            });
        }
        Ok(())
    }

    pub(super) fn room_size(&self) -> (usize, usize) {
        (self.room_width, self.room_height)
    }
}
