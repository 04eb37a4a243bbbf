//! Install command implementation

use console::Style;

use crate::cli::InstallArgs;
use crate::error::Result;

/// Run install command
pub fn run(args: InstallArgs) -> Result<()> {
    let installed = crate::install::install(&args.artifact, &args.target)?;

    println!(
        "{} {} into {} ({} file(s))",
        Style::new().green().bold().apply_to("Installed"),
        installed.record.distribution_name(),
        installed.target.display(),
        installed.record.files.len()
    );

    Ok(())
}
