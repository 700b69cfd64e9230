//! Logrepo join CLI library.
//!
//! This crate provides the `lj` command line interface over `lj-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, InputArgs, OccurrenceAction, RootArgs};
pub use config::Config;
