//! Execute a queue of random moves, then undo them in reverse order.
//!
//! Set `PATTERN_RECIPES_SEED` to replay a particular run.

use pattern_recipes::command::{Character, CommandQueue, Move};
use pattern_recipes::runtime::{setup_tracing, DemoConfig};
use tracing::{info, info_span};

const MOVES: usize = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    let config = DemoConfig::from_env()?;
    let _span = info_span!("command_demo", seed = config.seed).entered();
    info!("Starting command demo");

    let mut rng = config.rng();
    let mut rex = Character::new("Rex");
    let mut queue = CommandQueue::new();
    for _ in 0..MOVES {
        queue.push(Move::random(&mut rng));
    }

    println!("seed {} ({} moves)", config.seed, queue.len());
    println!("{} starts at {}", rex.name, rex.position());

    while queue.execute_next(&mut rex)? {
        println!("{} moved to {}", rex.name, rex.position());
    }

    while queue.undo_last(&mut rex)? {
        println!("{} undo back to {}", rex.name, rex.position());
    }

    println!("{} ends at {}", rex.name, rex.position());
    Ok(())
}
