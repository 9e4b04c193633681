//! Procedural dungeon generation split into coherent submodules.

pub mod config;
pub mod model;

mod furnish;
mod generator;
mod random;
mod room;

pub use config::{ConfigError, DungeonConfig};
pub use furnish::RoomFurnisher;
pub use generator::DungeonGenerator;
pub use model::{Dungeon, GenerationReport};
pub use room::RoomRect;

pub fn generate_dungeon(config: DungeonConfig, seed: u64) -> Result<Dungeon, ConfigError> {
    Ok(DungeonGenerator::from_seed(config, seed)?.generate())
}

#[cfg(test)]
mod tests {
    use super::{DungeonConfig, DungeonGenerator};

    #[test]
    fn generate_dungeon_matches_dungeon_generator_output() {
        let seed = 123_u64;

        let from_helper = super::generate_dungeon(DungeonConfig::default(), seed)
            .expect("default config is valid");
        let from_generator = DungeonGenerator::from_seed(DungeonConfig::default(), seed)
            .expect("default config is valid")
            .generate();

        assert_eq!(from_helper, from_generator);
    }

    #[test]
    fn generate_dungeon_rejects_invalid_config() {
        let config = DungeonConfig { tile_size: 0, ..DungeonConfig::default() };
        assert!(super::generate_dungeon(config, 1).is_err());
    }
}
