//! Command-line interface for parlor_games.

use clap::{Parser, Subcommand};

/// Parlor Games - casual game session server
#[derive(Parser, Debug)]
#[command(name = "parlor_games")]
#[command(about = "Casual game session server with a REST API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Maximum live sessions before eviction (overrides the config file)
        #[arg(long)]
        session_capacity: Option<usize>,
    },
}
