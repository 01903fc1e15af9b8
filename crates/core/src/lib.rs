pub mod game;
pub mod types;
pub mod world;
pub mod worldgen;

pub use game::{CommandOutcome, Game};
pub use types::*;
pub use world::{Exit, Item, Room, World};
pub use worldgen::{GenConfig, GenerateError, ValidateError, WorldGenerator, generate_world};
