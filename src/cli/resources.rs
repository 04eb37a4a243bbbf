use clap::Parser;
use std::path::PathBuf;

/// Arguments for the resources command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List every resource of a sub-package:\n    satchel resources wheatley --target site\n\n\
                  Check the installed files first:\n    satchel resources wheatley -t site --verify\n\n\
                  Only extension scripts:\n    satchel resources wheatley -t site --pattern '*.hy'\n\n\
                  Dotted sub-package names:\n    satchel resources wheatley.plugins -t site")]
pub struct ResourcesArgs {
    /// Sub-package name
    pub package: String,

    /// Directory the package was installed into
    #[arg(long, short = 't', value_name = "DIR")]
    pub target: PathBuf,

    /// Only show resources matching this glob, relative to the sub-package
    #[arg(long, short = 'p', value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Check the installed files of the sub-package against the record
    #[arg(long)]
    pub verify: bool,
}
