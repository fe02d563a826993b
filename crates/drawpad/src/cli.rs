//! Command line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Drawpad command line.
#[derive(Parser, Debug)]
#[command(name = "drawpad")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Drawpad gallery tools", long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults to DRAWPAD_CONFIG_PATH or ./drawpad.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Flag the monthly-best drawings of a JSON gallery export
    Rank {
        /// JSON array of drawing records, or `-` for stdin
        input: PathBuf,

        /// Timezone to bucket months in (`local`, `utc` or an IANA name)
        #[arg(short, long)]
        timezone: Option<String>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the winners per month instead of the annotated records
        #[arg(short, long)]
        summary: bool,
    },

    /// Render the web-app manifest
    Manifest {
        /// Write the manifest here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration as YAML
    Config,
}
