use anyhow::{Context, Result};
use clap::Parser;
use game_core::{GenConfig, generate_world};
use std::fs;

mod render;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run seed; the same seed always yields the same world
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Optional JSON file overriding the default generation config
    #[arg(short, long)]
    config: Option<String>,
    /// Override the configured room count
    #[arg(short, long)]
    rooms: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path}"))?;
            serde_json::from_str::<GenConfig>(&data)
                .with_context(|| "Failed to deserialize config JSON")?
        }
        None => GenConfig::default(),
    };
    if let Some(rooms) = args.rooms {
        config.room_count = rooms;
    }

    let world = generate_world(args.seed, &config)
        .map_err(|e| anyhow::anyhow!("Generation failed: {e}"))?;

    println!("Generated {} rooms from seed {}.", world.len(), args.seed);
    println!();
    println!("{}", render::map_string(&world, Some(world.start)));
    println!("{}", render::describe_rooms(&world));
    println!("Start: {}", world.room(world.start).name);

    Ok(())
}
