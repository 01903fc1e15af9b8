//! Procedural world generation domain split into coherent submodules.

pub mod config;
pub mod error;
pub mod pathfind;

mod builder;
mod generator;
mod puzzle;
mod seed;
mod validate;

pub use config::GenConfig;
pub use error::{GenerateError, ValidateError};
pub use generator::{MAX_GENERATION_ATTEMPTS, WorldGenerator};
pub use validate::validate_world;

use crate::world::World;

pub fn generate_world(run_seed: u64, config: &GenConfig) -> Result<World, GenerateError> {
    WorldGenerator::new(run_seed, config.clone()).generate()
}

#[cfg(test)]
mod tests {
    use super::{GenConfig, WorldGenerator};

    #[test]
    fn generate_world_matches_world_generator_output() {
        let seed = 123_u64;
        let config = GenConfig::default();

        let from_helper = super::generate_world(seed, &config).unwrap();
        let from_generator = WorldGenerator::new(seed, config).generate().unwrap();

        assert_eq!(from_helper.canonical_bytes(), from_generator.canonical_bytes());
    }
}
