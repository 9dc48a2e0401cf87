//! Build objects from an enumerated discriminator with a plain factory function.

use pattern_recipes::factory::{make_game_object, ObjectType};
use pattern_recipes::runtime::setup_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    // The discriminator is chosen at runtime, here from text.
    let requested = ["plane", "boat"];
    let objects = requested
        .iter()
        .map(|name| name.parse::<ObjectType>().map(make_game_object))
        .collect::<Result<Vec<_>, _>>()?;

    for object in &objects {
        println!("made {}: {}", object.kind(), object.render());
    }

    match "submarine".parse::<ObjectType>() {
        Ok(kind) => println!("unexpectedly parsed {kind}"),
        Err(e) => println!("rejected: {e}"),
    }
    Ok(())
}
