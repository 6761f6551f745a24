//! CLI struct definitions for the sigur-syncconf command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `main.rs`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "sigur-syncconf",
    version = crate::VERSION,
    about = "Applies server-sync settings to the parameter store of a Sigur access-control installation."
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a settings file to the parameter store
    Apply {
        /// Path to the Sigur installation database
        #[clap(long)]
        db: PathBuf,
        /// Path to the TOML settings file
        #[clap(long)]
        config: PathBuf,
        /// Print the batch without writing to the store
        #[clap(long)]
        dry_run: bool,
        /// Output format
        #[clap(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Show the current values of the server-sync parameters
    Show {
        /// Path to the Sigur installation database
        #[clap(long)]
        db: PathBuf,
        /// Output format
        #[clap(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Kill switch: set SS_ENABLED=0, leaving everything else untouched
    Disable {
        /// Path to the Sigur installation database
        #[clap(long)]
        db: PathBuf,
    },
    /// Print a starter TOML settings file to stdout
    Template,
}
