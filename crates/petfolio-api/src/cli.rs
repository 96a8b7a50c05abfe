//! CLI command definitions for the `pfolio` binary.
//!
//! Uses clap derive macros for argument parsing. The binary is primarily a
//! server launcher (`pfolio serve`), with shell completion generation on the
//! side.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Pet profile and chat backend.
#[derive(Parser)]
#[command(name = "pfolio", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000", env = "PORT")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
