use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install into a directory:\n    satchel install dist/wheatley-0.1.tar.gz --target site\n\n\
                   Upgrade an installed package:\n    satchel install dist/wheatley-0.2.tar.gz -t site")]
pub struct InstallArgs {
    /// Artifact to install
    pub artifact: PathBuf,

    /// Directory to install into
    #[arg(long, short = 't', value_name = "DIR")]
    pub target: PathBuf,
}
