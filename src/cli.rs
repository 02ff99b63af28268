use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::OutputFormat;

/// tiercalc - Credit tier calculator
#[derive(Parser, Debug)]
#[command(name = "tiercalc")]
#[command(about = "Turn selected activities into credits and see which privileges they unlock")]
#[command(version)]
pub struct Cli {
    /// Catalog file (JSON) with activities, tiers, and presets.
    ///
    /// Falls back to the built-in catalog when neither this flag nor
    /// TIERCALC_CATALOG is set.
    #[arg(long, global = true, env = "TIERCALC_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Write logs to this file (the interactive UI logs nowhere otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive calculator (default)
    Tui,
    /// Print the summary for a selection without the interactive UI
    Summary {
        /// Activity ids to select (comma separated or repeated)
        #[arg(short, long, value_delimiter = ',')]
        select: Vec<String>,

        /// Start from a named preset; --select ids are added on top
        #[arg(short, long)]
        preset: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the activities, tiers, and presets of the active catalog
    Catalog,
    /// Validate a catalog file
    Validate {
        /// Path to catalog file to validate
        path: PathBuf,
    },
    /// Write the built-in catalog to a file as a starting point
    Export {
        /// Destination path
        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether this invocation opens the interactive UI
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Tui))
    }
}
