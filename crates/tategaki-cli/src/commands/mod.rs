//! Subcommand implementations

pub mod batch;
pub mod fonts;
pub mod render;
