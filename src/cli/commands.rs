use crate::config::API_BASE_ENV;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ticketdesk")]
#[command(
    author,
    version,
    about = "A terminal front-end for submitting and tracking support tickets"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to run (defaults to the interactive TUI)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the ticket backend
    #[arg(long, global = true, env = API_BASE_ENV)]
    pub api_base: Option<String>,

    /// Path to config file (searches upward for .ticketdesk.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Open the interactive terminal UI
    Tui,

    /// Submit a new support ticket
    #[command(visible_alias = "new")]
    Submit {
        /// Brief summary (at most 100 characters)
        subject: String,

        /// Detailed description
        #[arg(short = 'd', long)]
        description: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a ticket's status
    #[command(visible_alias = "status")]
    Show {
        /// Ticket ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all tickets
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
