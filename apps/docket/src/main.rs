//! # Docket - Court Case Registry Server
//!
//! The main binary for the court office case registry.
//!
//! This application provides:
//! - HTTP REST API server (axum-based)
//! - CLI interface for running the server and inspecting the catalog
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                apps/docket (THE BINARY)            │
//! │                                                    │
//! │   ┌─────────────┐          ┌─────────────┐         │
//! │   │   CLI       │          │   HTTP API  │         │
//! │   │  (clap)     │          │   (axum)    │         │
//! │   └──────┬──────┘          └──────┬──────┘         │
//! │          │                        │                │
//! │          └────────────┬───────────┘                │
//! │                       ▼                            │
//! │               ┌───────────────┐                    │
//! │               │  docket-core  │                    │
//! │               │  (THE LOGIC)  │                    │
//! │               └───────────────┘                    │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! docket server --host 0.0.0.0 --port 8080
//!
//! # Start with demo cases pre-registered
//! docket server --seed demos/demo-cases.toml
//!
//! # Show the case-type catalog
//! docket types
//! ```

use clap::Parser;
use docket::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — DOCKET_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("DOCKET_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "docket=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the docket startup banner.
fn print_banner() {
    println!(
        r#"
  ██████╗  ██████╗  ██████╗██╗  ██╗███████╗████████╗
  ██╔══██╗██╔═══██╗██╔════╝██║ ██╔╝██╔════╝╚══██╔══╝
  ██║  ██║██║   ██║██║     █████╔╝ █████╗     ██║
  ██║  ██║██║   ██║██║     ██╔═██╗ ██╔══╝     ██║
  ██████╔╝╚██████╔╝╚██████╗██║  ██╗███████╗   ██║
  ╚═════╝  ╚═════╝  ╚═════╝╚═╝  ╚═╝╚══════╝   ╚═╝

  Court Case Registry Server v{}

  In-memory • Insertion-ordered • Single writer
"#,
        env!("CARGO_PKG_VERSION")
    );
}
