//! # Docket CLI Module
//!
//! This module implements the CLI interface for the docket binary.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server (optionally pre-seeded from a TOML file)
//! - `types` - Print the case-type catalog

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::AppError;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Docket - Court Case Registry Server
///
/// An in-memory registry of court filings with search, statistics,
/// and a single admin session. State lives for the lifetime of the
/// process; restart means an empty registry (or the seed file).
#[derive(Parser, Debug)]
#[command(name = "docket")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// TOML file of cases to register at startup
        #[arg(short, long)]
        seed: Option<PathBuf>,
    },

    /// Print the case-type catalog
    Types,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), AppError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port, seed }) => {
            cmd_server(&host, port, seed.as_deref()).await
        }
        Some(Commands::Types) => cmd_types(json_mode),
        None => {
            // No subcommand - start the server with defaults
            cmd_server("127.0.0.1", 8080, None).await
        }
    }
}
