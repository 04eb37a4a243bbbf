//! Command implementations for the Satchel CLI

pub mod build;
pub mod check;
pub mod completions;
pub mod helpers;
pub mod install;
pub mod list;
pub mod resources;
pub mod version;
