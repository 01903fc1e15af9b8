//! Generate-and-test orchestration: Build -> Place -> Validate with a
//! bounded retry loop. Each attempt is cheap and only probabilistically
//! correct; validation plus retry keeps the whole pipeline simple.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use super::builder::build_world;
use super::config::GenConfig;
use super::error::GenerateError;
use super::puzzle::place_puzzles;
use super::seed::derive_attempt_seed;
use super::validate::validate_world;
use crate::world::World;

pub const MAX_GENERATION_ATTEMPTS: u32 = 10;

pub struct WorldGenerator {
    run_seed: u64,
    config: GenConfig,
}

impl WorldGenerator {
    pub fn new(run_seed: u64, config: GenConfig) -> Self {
        Self { run_seed, config }
    }

    /// Returns the first fully validated world. No state survives a failed
    /// attempt; every retry rebuilds from a fresh sub-seeded RNG.
    pub fn generate(&self) -> Result<World, GenerateError> {
        let mut last_error = None;

        for attempt in 0..MAX_GENERATION_ATTEMPTS {
            let mut rng =
                ChaCha8Rng::seed_from_u64(derive_attempt_seed(self.run_seed, attempt));
            match self.attempt(&mut rng) {
                Ok(world) => return Ok(world),
                Err(err) if err.is_config_error() => return Err(err),
                Err(err) => last_error = Some(err),
            }
        }

        Err(GenerateError::AttemptsExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
            last: Box::new(last_error.expect("the attempt loop runs at least once")),
        })
    }

    fn attempt(&self, rng: &mut ChaCha8Rng) -> Result<World, GenerateError> {
        let mut world = build_world(&self.config, rng)?;
        place_puzzles(&self.config, &mut world, rng)?;
        validate_world(&world)?;
        Ok(world)
    }
}
