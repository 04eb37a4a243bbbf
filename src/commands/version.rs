//! Version command implementation

use crate::artifact::metadata::METADATA_VERSION;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("satchel {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  Metadata-Version: {METADATA_VERSION}");

    Ok(())
}

fn rustc_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
