//! CLI module - command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use clap::{Parser, Subcommand};

pub mod commands;

/// doctable - Convert markdown tables in MDX docs to TypeTable components
#[derive(Parser, Debug)]
#[command(name = "doctable")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit a machine-readable JSON summary instead of per-file output
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert markdown tables in MDX files to TypeTable components
    Convert(commands::convert::ConvertArgs),

    /// Rewrite malformed computed object keys to quoted literal keys
    FixKeys(commands::fix_keys::FixKeysArgs),
}
