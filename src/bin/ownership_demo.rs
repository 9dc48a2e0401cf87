//! Construct, copy, assign and release an exclusively-owned heap cell.
//!
//! Observations go to stdout, including one line per released cell. Run with
//! `RUST_LOG=info` (the default) to also see each allocation and release on stderr.

use pattern_recipes::ownership::{OwnedCell, ReleaseTracker};
use pattern_recipes::runtime::setup_tracing;
use tracing::info_span;

fn main() {
    setup_tracing();
    let _span = info_span!("ownership_demo").entered();

    let tracker = ReleaseTracker::new();
    {
        let first = OwnedCell::with_tracker(10, tracker.clone());
        println!("first: {first}");

        // Copy construction allocates a second, independent cell.
        let mut second = first.clone();
        println!("second (copy of first): {second}");

        second.set(20);
        println!("after modifying second:");
        println!("  first: {first}");
        println!("  second: {second}");

        // Copy assignment writes into third's existing cell.
        let mut third = OwnedCell::with_tracker(30, tracker.clone());
        third.clone_from(&second);
        println!("third (assigned from second): {third}");

        println!("leaving scope, releasing all three cells");
    }

    for value in tracker.released() {
        println!("released cell holding {value}");
    }
    println!("{} cells released", tracker.count());
}
