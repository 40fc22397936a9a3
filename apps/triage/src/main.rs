//! # Triage - Civic Issue Triage
//!
//! The main binary for the deterministic triage engine.
//!
//! This application provides:
//! - HTTP REST API server (axum-based)
//! - CLI interface for one-off and batch analysis
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │              apps/triage (THE BINARY)            │
//! │                                                  │
//! │  ┌─────────────┐    ┌─────────────┐              │
//! │  │   CLI       │    │   HTTP API  │   config     │
//! │  │  (clap)     │    │   (axum)    │   (toml)     │
//! │  └──────┬──────┘    └──────┬──────┘              │
//! │         └─────────┬────────┘                     │
//! │                   ▼                              │
//! │           ┌───────────────┐                      │
//! │           │  triage-core  │                      │
//! │           │  (THE LOGIC)  │                      │
//! │           └───────────────┘                      │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! triage server --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! triage analyze "Huge pothole near the school" -l road
//! triage batch -f reports.json --json-mode
//! triage explain "gas smell in the basement"
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triage::cli;

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // TRIAGE_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("TRIAGE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "triage=info,tower_http=debug".into());

    // Logs go to stderr so `--json-mode` output on stdout stays parseable.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  ████████╗██████╗ ██╗ █████╗  ██████╗ ███████╗
  ╚══██╔══╝██╔══██╗██║██╔══██╗██╔════╝ ██╔════╝
     ██║   ██████╔╝██║███████║██║  ███╗█████╗
     ██║   ██╔══██╗██║██╔══██║██║   ██║██╔══╝
     ██║   ██║  ██║██║██║  ██║╚██████╔╝███████╗
     ╚═╝   ╚═╝  ╚═╝╚═╝╚═╝  ╚═╝ ╚═════╝ ╚══════╝

  Civic Issue Triage v{}

  Deterministic • Explainable • Rule-based
"#,
        env!("CARGO_PKG_VERSION")
    );
}
