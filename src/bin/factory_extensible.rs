//! Register built-in and user-defined types by name, then spawn from a list.

use pattern_recipes::factory::{Boat, GameObject, GameObjectFactory, Plane};
use pattern_recipes::runtime::setup_tracing;
use std::cell::Cell;
use std::rc::Rc;

const SPAWN_LIST: &str = include_str!("../../demos/spawn_list.txt");

/// A type the factory has never heard of, defined by its user.
#[derive(Debug)]
struct Ant {
    x: i32,
    y: i32,
    ticks: u64,
}

impl Ant {
    fn new(x: i32, y: i32) -> Self {
        Self { x, y, ticks: 0 }
    }
}

impl GameObject for Ant {
    fn kind(&self) -> &'static str {
        "ant"
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn play_default_animation(&self) -> &'static str {
        "antennae-twitch"
    }

    fn move_in_game(&mut self) {
        self.y += 1;
    }

    fn update(&mut self) {
        self.ticks += 1;
    }

    fn render(&self) -> String {
        format!("Ant at ({}, {}) tick {}", self.x, self.y, self.ticks)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let ants_created = Rc::new(Cell::new(0usize));

    let mut factory = GameObjectFactory::new();
    factory.register("plane", Plane::create);
    factory.register("boat", Boat::create);
    factory.register("Ant", {
        let ants_created = Rc::clone(&ants_created);
        move || -> Box<dyn GameObject> {
            ants_created.set(ants_created.get() + 1);
            Box::new(Ant::new(0, 0))
        }
    });
    println!("registered: {}", factory.registered_keys().join(", "));

    let mut world = factory.spawn_from_manifest(SPAWN_LIST.as_bytes())?;
    for object in world.iter_mut() {
        object.move_in_game();
        object.update();
        println!("{} [{}]", object.render(), object.play_default_animation());
    }
    println!("ants created: {}", ants_created.get());

    if let Err(e) = factory.create("submarine") {
        println!("no instance: {e}");
    }

    factory.unregister("boat");
    match factory.create("boat") {
        Ok(object) => println!("unexpectedly built {}", object.kind()),
        Err(e) => println!("after unregister: {e}"),
    }
    Ok(())
}
