pub mod entity;
pub mod grid;
pub mod mapgen;
pub mod seed;
pub mod spatial;
pub mod types;
pub mod world;

pub use entity::{Entity, MoveInput};
pub use grid::TileGrid;
pub use mapgen::{Dungeon, DungeonConfig, DungeonGenerator, GenerationReport, RoomRect};
pub use types::*;
pub use world::World;
