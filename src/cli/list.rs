use clap::Parser;
use std::path::PathBuf;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List the files of an artifact:\n    satchel list dist/wheatley-0.1.tar.gz\n\n\
                  Also check every file against the record:\n    satchel list dist/wheatley-0.1.tar.gz --verify")]
pub struct ListArgs {
    /// Artifact to inspect
    pub artifact: PathBuf,

    /// Verify file hashes against the record
    #[arg(long)]
    pub verify: bool,
}
