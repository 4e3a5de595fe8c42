//! Command-line interface for roster.
//!
//! This module provides the CLI structure for the `roster` binary and the
//! interactive browse session.

mod commands;
pub mod interactive;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, ListCommand, OutputFormat, ShowCommand};

/// roster - Browse and search a staff directory
///
/// Fetches a batch of people from a randomuser.me-compatible API and shows
/// them as cards, with a searchable listing and a paginated detail view.
#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Request a reproducible batch with this seed
    #[arg(long, global = true, value_name = "SEED")]
    pub seed: Option<String>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to `browse`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the directory interactively
    Browse,

    /// Print the gallery, optionally filtered by name
    List(ListCommand),

    /// Print the detail view for one person
    Show(ShowCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}
