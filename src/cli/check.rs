use clap::Parser;
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show what would be bundled:\n    satchel check\n\n\
                  Machine-readable output:\n    satchel check --json")]
pub struct CheckArgs {
    /// Package descriptor, relative to the source root
    #[arg(long, short = 'f', value_name = "FILE", default_value = "satchel.yaml")]
    pub file: PathBuf,

    /// Print the planned record and warnings as JSON
    #[arg(long)]
    pub json: bool,
}
