mod list;
mod show;
mod submit;
mod tui;

pub use list::handle_list;
pub use show::handle_show;
pub use submit::handle_submit;
pub use tui::handle_tui;

use crate::client::TicketClient;
use crate::config::DeskConfig;
use anyhow::{Context, Result};
use std::future::Future;

/// Common context passed to the request-issuing command handlers
pub struct CommandContext {
    pub client: TicketClient,
}

impl CommandContext {
    pub fn new(config: &DeskConfig) -> Result<Self> {
        let base_url = config.api_base_url()?;
        let client = TicketClient::new(&base_url).context("Failed to create HTTP client")?;
        tracing::debug!(base_url = %client.base_url(), "Using ticket backend");
        Ok(Self { client })
    }

    /// Runs a single request to completion.
    pub fn block_on<F: Future>(&self, future: F) -> Result<F::Output> {
        let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
        Ok(runtime.block_on(future))
    }
}
