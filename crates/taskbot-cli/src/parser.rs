//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the taskbot binary.
///
/// This is the top-level parser that handles global options and
/// dispatches to subcommands.
#[derive(Parser)]
#[command(name = "taskbot")]
#[command(about = "Task tracker: resource service and operator command bot")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
