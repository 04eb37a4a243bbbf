//! List command implementation
//!
//! Shows the metadata and files of a built artifact, optionally verifying
//! every file against the record.

use console::Style;

use crate::artifact::ArtifactReader;
use crate::bundler::FileKind;
use crate::cli::ListArgs;
use crate::error::Result;
use crate::ui::{display_files, display_metadata, display_summary};

/// Run list command
pub fn run(args: ListArgs) -> Result<()> {
    let reader = ArtifactReader::open(&args.artifact)?;
    if args.verify {
        reader.verify()?;
    }

    let record = reader.record();
    display_metadata(reader.metadata());
    println!();
    if record.files.is_empty() {
        println!("No bundled files.");
    } else {
        display_files(&record.files);
    }
    println!();

    let count = |kind: FileKind| record.files.iter().filter(|e| e.kind == kind).count();
    display_summary(
        count(FileKind::Module),
        count(FileKind::Resource),
        record.files.iter().map(|e| e.size).sum(),
    );

    if args.verify {
        println!(
            "{} {} file(s) match the record",
            Style::new().green().bold().apply_to("Verified"),
            record.files.len()
        );
    }

    Ok(())
}
