//! # Triage CLI Module
//!
//! This module implements the CLI interface for the triage engine.
//!
//! ## Available Commands
//!
//! - `analyze` - Analyze a single description
//! - `batch` - Analyze every report in a JSON file
//! - `explain` - Show the rule-level breakdown for a description
//! - `categories` - List the category table
//! - `server` - Start the HTTP server

mod commands;

use crate::config::AppConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use triage_core::TriageError;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Triage - civic issue triage engine
///
/// Turns free-text issue descriptions into a severity tier, an urgency
/// score and suggested categories, with the reasons behind them.
#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file (default: ./triage.toml if present)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single issue description
    Analyze {
        /// Free-text description of the issue
        description: String,

        /// Image label (repeatable)
        #[arg(short, long = "label")]
        labels: Vec<String>,
    },

    /// Analyze every report in a JSON file
    Batch {
        /// Path to a JSON array of {"description", "image_labels"} objects
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show which rules fired for a description
    Explain {
        /// Free-text description of the issue
        description: String,

        /// Image label (repeatable)
        #[arg(short, long = "label")]
        labels: Vec<String>,
    },

    /// List the category table
    Categories,

    /// Start HTTP server
    Server {
        /// Host to bind to (overrides the config file)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), TriageError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let json_mode = cli.json_mode;

    if cli.verbose {
        tracing::info!("Effective configuration: {:?}", config);
    }

    match cli.command {
        Commands::Analyze {
            description,
            labels,
        } => cmd_analyze(&config, json_mode, &description, &labels),
        Commands::Batch { file } => cmd_batch(&config, json_mode, &file),
        Commands::Explain {
            description,
            labels,
        } => cmd_explain(json_mode, &description, &labels),
        Commands::Categories => cmd_categories(json_mode),
        Commands::Server { host, port } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            cmd_server(&host, port, config.limits).await
        }
    }
}
