//! CLI module for discovery
//!
//! Provides command-line interface for the discovery server.

pub mod serve;

use clap::{Parser, Subcommand};

/// Discovery Service - endpoint name to URL template registry
#[derive(Parser, Debug)]
#[command(name = "discovery")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    DISCOVERY_HOST            Bind address (default: 0.0.0.0)
    DISCOVERY_PORT            Listen port (default: 5112)
    DISCOVERY_BEARER_TOKEN    Bearer token for /register and /get-url (required)
    DISCOVERY_SECRET_KEY      Shared secret checked against `secret_key` (optional)
    DISCOVERY_AUTH_DISABLED   Disable bearer auth (dev/test only)
    DISCOVERY_LOG_LEVEL       Log filter (default: info)
    DISCOVERY_LOG_DIR         Also write daily rotated log files here
    START_MODE                `docker` reads ./app/.env instead of ./.env
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the discovery server
    Serve(serve::ServeArgs),
}
