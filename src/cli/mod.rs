//! CLI definitions using clap derive API
//!
//! Each command's arguments live in their own submodule:
//! - build: Build command arguments
//! - check: Check command arguments
//! - list: List command arguments
//! - install: Install command arguments
//! - resources: Resources command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod build;
pub mod check;
pub mod completions;
pub mod install;
pub mod list;
pub mod resources;

pub use build::BuildArgs;
pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use resources::ResourcesArgs;

/// Satchel - package resource bundler
///
/// Bundle sub-package code together with declared resource files into a
/// reproducible artifact.
#[derive(Parser, Debug)]
#[command(
    name = "satchel",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bundle package code and resource files into reproducible artifacts",
    long_about = "Satchel reads a package descriptor (satchel.yaml), selects the module files and \
                  the resource files matching each sub-package's glob patterns, and writes them \
                  into a deterministic artifact that can be installed and queried at runtime.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  satchel check                                  \x1b[90m# Show what would be bundled\x1b[0m\n   \
                  satchel build -o dist                          \x1b[90m# Build the artifact into dist/\x1b[0m\n   \
                  satchel list dist/wheatley-0.1.tar.gz --verify \x1b[90m# Inspect and verify an artifact\x1b[0m\n   \
                  satchel install dist/wheatley-0.1.tar.gz -t site \x1b[90m# Install into site/\x1b[0m\n   \
                  satchel resources wheatley -t site -p '*.hy'   \x1b[90m# Locate installed resources\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Source root directory (defaults to current directory)
    #[arg(long, short = 'C', global = true, env = "SATCHEL_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an artifact from the package descriptor
    Build(BuildArgs),

    /// Show what a build would bundle without writing anything
    Check(CheckArgs),

    /// List the files of an artifact
    List(ListArgs),

    /// Install an artifact into a target directory
    Install(InstallArgs),

    /// Locate the resources of an installed sub-package
    Resources(ResourcesArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
