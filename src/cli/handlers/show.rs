use crate::model::Ticket;
use crate::validation;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_show(ctx: &CommandContext, id: String, json: bool) -> Result<()> {
    let id = validation::parse_ticket_id(&id)?;
    let ticket = ctx
        .block_on(ctx.client.get_ticket(id))?
        .map_err(|e| anyhow::anyhow!(e.lookup_message()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ticket)?);
    } else {
        print_ticket(&ticket);
    }
    Ok(())
}

fn print_ticket(ticket: &Ticket) {
    println!("ID:          {}", ticket.id.to_string().cyan().bold());
    println!("Subject:     {}", ticket.subject.bold());
    println!("Description: {}", ticket.description);
    println!("Status:      {}", ticket.status.blue());
}
