//! Version command implementation

use crate::error::Result;
use crate::state::{AUTO_FETCHED_FLAG, FETCH_PENDING_FLAG};

/// Run version command
pub fn run() -> Result<()> {
    println!("autofetch {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("State flags:");
    println!("  {AUTO_FETCHED_FLAG}");
    println!("  {FETCH_PENDING_FLAG}");

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
