//! Satchel - package resource bundler
//!
//! Reads a declarative package descriptor, selects the module files and the
//! resource files matching each sub-package's glob patterns, and writes them
//! into a reproducible artifact. Installed artifacts can be queried at runtime
//! through [`locator::ResourceLocator`].
//!
//! ```no_run
//! # fn main() -> satchel::error::Result<()> {
//! use std::path::Path;
//! use satchel::descriptor::PackageDescriptor;
//!
//! let descriptor = PackageDescriptor::load(Path::new("satchel.yaml"))?;
//! let report = satchel::bundler::build(&descriptor, Path::new("."), Path::new("dist"))?;
//! for warning in &report.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod bundler;
pub mod cli;
pub mod commands;
pub mod descriptor;
pub mod error;
pub mod hash;
pub mod install;
pub mod locator;
pub mod logging;
pub mod pattern;
pub mod ui;
pub mod warning;

pub use bundler::{BuildReport, Bundler, build, plan};
pub use descriptor::PackageDescriptor;
pub use error::{ErrorKind, Result, SatchelError};
pub use locator::ResourceLocator;
pub use warning::BuildWarning;
