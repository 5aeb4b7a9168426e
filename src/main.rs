use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use ticketdesk::cli::handlers::{self, CommandContext};
use ticketdesk::cli::{Cli, Commands};
use ticketdesk::config::DeskConfig;
use ticketdesk::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Commands::Tui);
    let is_tui = matches!(command, Commands::Tui);

    // The TUI owns the terminal, so its logs always go to a file.
    let log_file = match (&cli.log_file, is_tui) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => logging::default_log_file(),
        (None, false) => None,
    };
    logging::init(cli.verbose, log_file, !is_tui)?;

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let config = load_config(cli.config.as_deref(), cli.api_base.clone())?;

    match command {
        Commands::Tui => handlers::handle_tui(config),
        Commands::Submit {
            subject,
            description,
            json,
        } => {
            let ctx = CommandContext::new(&config)?;
            handlers::handle_submit(&ctx, subject, description, json)
        }
        Commands::Show { id, json } => {
            let ctx = CommandContext::new(&config)?;
            handlers::handle_show(&ctx, id, json)
        }
        Commands::List { json } => {
            let ctx = CommandContext::new(&config)?;
            handlers::handle_list(&ctx, json)
        }
    }
}

fn load_config(path: Option<&Path>, api_base: Option<String>) -> Result<DeskConfig> {
    let config = match path {
        Some(path) => DeskConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir()?;
            let (config, found) =
                DeskConfig::load(&cwd).context("Failed to load ticketdesk configuration")?;
            if let Some(found) = found {
                tracing::debug!(path = %found.display(), "Loaded configuration");
            }
            config
        }
    };
    Ok(config.with_api_base(api_base))
}
