//! Check command implementation
//!
//! Resolves the descriptor against the source tree and shows what a build
//! would bundle. Nothing is written.

use serde::Serialize;
use std::path::PathBuf;

use super::helpers::{load_descriptor, resolve_root};
use crate::artifact::{CoreMetadata, Record};
use crate::bundler::{FileKind, plan};
use crate::cli::CheckArgs;
use crate::error::{Result, fs};
use crate::ui::{display_files, display_metadata, display_summary, display_warnings};
use crate::warning::BuildWarning;

#[derive(Serialize)]
struct CheckReport<'a> {
    metadata: &'a CoreMetadata,
    record: &'a Record,
    warnings: &'a [BuildWarning],
}

/// Run check command
pub fn run(root: Option<PathBuf>, args: CheckArgs) -> Result<()> {
    let root = resolve_root(root)?;
    let descriptor = load_descriptor(&root, &args.file)?;
    let plan = plan(&descriptor, &root)?;

    if args.json {
        let report = CheckReport {
            metadata: &plan.metadata,
            record: &plan.record,
            warnings: &plan.warnings,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| fs::io_error(format!("Failed to serialize report: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    display_metadata(&plan.metadata);
    println!();
    if plan.manifest.is_empty() {
        println!("No files would be bundled.");
    } else {
        display_files(plan.manifest.iter());
    }
    println!();
    display_summary(
        plan.manifest.of_kind(FileKind::Module).count(),
        plan.manifest.of_kind(FileKind::Resource).count(),
        plan.manifest.total_size(),
    );
    display_warnings(&plan.warnings);

    Ok(())
}
