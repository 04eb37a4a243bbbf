//! Resources command implementation
//!
//! Prints the installed location of each resource of a sub-package, one
//! per line, so the output can be fed to other tools.

use crate::cli::ResourcesArgs;
use crate::error::Result;
use crate::locator::ResourceLocator;

/// Run resources command
pub fn run(args: ResourcesArgs) -> Result<()> {
    let locator = ResourceLocator::find(&args.target, &args.package)?;
    if args.verify {
        locator.verify()?;
    }

    let entries = match &args.pattern {
        Some(pattern) => locator.matching(pattern)?,
        None => locator.resources(),
    };

    for entry in entries {
        println!(
            "{}",
            locator.path_of(locator.relative_path(entry))?.display()
        );
    }

    Ok(())
}
