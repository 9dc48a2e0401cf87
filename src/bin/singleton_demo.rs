//! Append to the process-wide logger from anywhere, then dump it.
//!
//! The moment of lazy creation is printed on stdout as well as logged on stderr.

use pattern_recipes::runtime::setup_tracing;
use pattern_recipes::singleton::Logger;

fn main() -> std::io::Result<()> {
    setup_tracing();

    println!("logger created before first access: {}", Logger::is_initialized());
    Logger::instance().add_message("Hello, Message1");
    println!("logger created after first access: {}", Logger::is_initialized());

    Logger::instance().add_message("Hello, Message2");
    Logger::instance().add_message("Hello, Message3");

    Logger::instance().write_to(std::io::stdout().lock())
}
