//! # Observability & Tracing
//!
//! Every recipe reports what it is doing through `tracing` events: the ownership
//! recipe logs each allocation and release, the command queue logs each execute and
//! undo, the factories log every object they build, and the logger singleton logs its
//! one-time construction.
//!
//! The demo binaries print their *observations* to stdout with `println!`. The
//! structured log stream goes to **stderr**, so the two never interleave when you pipe
//! a demo somewhere.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Default: info and above
//! cargo run --bin command_demo
//!
//! # Show every execute/undo with the positions involved
//! RUST_LOG=debug cargo run --bin command_demo
//!
//! # Silence the log stream, keep the observations
//! RUST_LOG=off cargo run --bin ownership_demo
//!
//! # Filter to a single recipe
//! RUST_LOG=pattern_recipes::factory=debug cargo run --bin factory_extensible
//! ```
//!
//! ## Output Format
//!
//! The compact format without targets keeps lines short:
//!
//! ```text
//! INFO Constructed value=10
//! INFO Copy constructed value=10
//! DEBUG Move executed command="move" character=Rex from=(0, 0) to=(3, 1)
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes the tracing subscriber for a demo binary.
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - Show info, warn, and error messages (default)
/// - `RUST_LOG=debug` - Show debug and above
/// - `RUST_LOG=off` - Disable the log stream entirely
///
/// Calling this twice is harmless: the second call leaves the first subscriber in place.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
