//! CLI subcommand implementations.

pub mod build_tree;
pub mod flatten;
pub mod from_api;
pub mod occurrence;
pub mod to_api;
pub mod util;
