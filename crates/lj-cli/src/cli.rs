//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lj_core::{Direction, TimeScale};

/// Logrepo join configuration converter.
///
/// Reads join configurations as JSON from a file or stdin and writes the
/// converted form to stdout.
#[derive(Debug, Parser)]
#[command(name = "lj", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert nested read-API joins into the editor tree.
    FromApi(RootArgs),

    /// Flatten the editor tree into write-API records.
    ToApi(RootArgs),

    /// Nest a flat editor working list under a root logrepo.
    BuildTree(RootArgs),

    /// Flatten the editor tree into a working list.
    Flatten(InputArgs),

    /// Convert a single occurrence window.
    Occurrence {
        #[command(subcommand)]
        action: OccurrenceAction,
    },
}

/// Where to read JSON input from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input file. Reads stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Input plus the logrepo the joins hang off.
#[derive(Debug, Args)]
pub struct RootArgs {
    /// Name of the base logrepo.
    #[arg(long)]
    pub root: String,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Occurrence conversions.
#[derive(Debug, Subcommand)]
pub enum OccurrenceAction {
    /// Backend hour window to editor occurrence.
    Decode {
        /// Hours the target may precede the source.
        #[arg(long, default_value_t = 0.0)]
        start_before: f64,

        /// Hours the target may follow the source.
        #[arg(long, default_value_t = 0.0)]
        end_after: f64,
    },

    /// Editor occurrence to backend hour window.
    Encode {
        /// `before` or `after`.
        #[arg(long)]
        occurrence: Direction,

        /// Magnitude in `time_scale` units.
        #[arg(long)]
        time_unit: f64,

        /// `hours` or `days`.
        #[arg(long)]
        time_scale: TimeScale,
    },
}
