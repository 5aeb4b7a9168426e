use crate::model::NewTicket;
use crate::validation;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_submit(
    ctx: &CommandContext,
    subject: String,
    description: String,
    json: bool,
) -> Result<()> {
    let ticket = NewTicket::new(subject, description);
    validation::validate_new_ticket(&ticket)?;

    let created = ctx
        .block_on(ctx.client.create_ticket(&ticket))?
        .map_err(|e| anyhow::anyhow!(e.submit_message()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else {
        println!(
            "{} Your Ticket ID: {}",
            "Ticket submitted!".green(),
            created.id.to_string().cyan()
        );
    }
    Ok(())
}
