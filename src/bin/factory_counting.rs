//! A factory type that counts how many objects of each type it has built.

use pattern_recipes::factory::{CountingFactory, ObjectType};
use pattern_recipes::runtime::setup_tracing;

fn main() {
    setup_tracing();

    let mut factory = CountingFactory::new();
    let objects = [ObjectType::Plane, ObjectType::Boat, ObjectType::Boat]
        .into_iter()
        .map(|kind| factory.create(kind))
        .collect::<Vec<_>>();

    for object in &objects {
        println!("created {}", object.kind());
    }
    println!("{}", factory.report());
}
