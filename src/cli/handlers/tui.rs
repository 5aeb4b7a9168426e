use crate::config::DeskConfig;
use anyhow::Result;

pub fn handle_tui(config: DeskConfig) -> Result<()> {
    crate::tui::run_tui(config)?;
    Ok(())
}
