//! Build command implementation
//!
//! Loads the descriptor, bundles the declared sub-packages and writes the
//! artifact into the output directory.

use console::Style;
use std::path::PathBuf;

use super::helpers::{load_descriptor, resolve_in_root, resolve_root};
use crate::bundler::{Bundler, FileKind};
use crate::cli::BuildArgs;
use crate::error::Result;
use crate::ui::display_warnings;

/// Run build command
pub fn run(root: Option<PathBuf>, args: BuildArgs) -> Result<()> {
    let root = resolve_root(root)?;
    let descriptor = load_descriptor(&root, &args.file)?;
    let out_dir = resolve_in_root(&root, &args.out_dir);

    let report = Bundler::new(&descriptor, &root)?.build(&out_dir)?;

    display_warnings(&report.warnings);
    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Built"),
        report.artifact.display()
    );
    println!(
        "  {} module(s), {} resource(s)",
        report.manifest.of_kind(FileKind::Module).count(),
        report.manifest.of_kind(FileKind::Resource).count()
    );

    Ok(())
}
