//! Terminal presentation layer
//!
//! Human-readable output for the commands. Colors come from `console` and
//! are dropped automatically when stdout is not a terminal.

pub mod display;

pub use display::{
    display_files, display_metadata, display_summary, display_warnings, format_file_row,
    format_size,
};
