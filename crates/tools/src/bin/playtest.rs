//! Random-player harness: feeds a generated game biased random commands
//! until it wins or the turn budget runs out.

use anyhow::Result;
use clap::Parser;
use game_core::{Direction, Game, GenConfig};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 2000)]
    max_turns: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn next_command(rng: &mut ChaCha8Rng, game: &Game) -> String {
    let room = game.world().room(game.player_location());

    // Grab anything lying around, and try every locked door we run into;
    // otherwise wander through a random exit.
    if !room.items.is_empty() {
        return "e".to_string();
    }
    if room.exits.values().any(|exit| exit.locked)
        && game.inventory().iter().any(|item| item.name == "key")
    {
        return "unlock".to_string();
    }
    let dirs: Vec<Direction> = room.exits.keys().copied().collect();
    format!("go {}", choose(rng, &dirs).label())
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting playtest on seed {} for max {} commands...", args.seed, args.max_turns);
    let mut game = Game::new(args.seed, &GenConfig::default())
        .map_err(|e| anyhow::anyhow!("Generation failed: {e}"))?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for issued in 0..args.max_turns {
        let command = next_command(&mut rng, &game);
        let outcome = game.handle_command(&command);
        if game.is_won() {
            println!(
                "Won after {} commands ({} scored turns): {}",
                issued + 1,
                game.turns(),
                outcome.reply
            );
            println!("Final score: {}", game.score());
            return Ok(());
        }
    }

    println!(
        "Budget exhausted after {} commands without a win (score {}).",
        args.max_turns,
        game.score()
    );
    Ok(())
}
