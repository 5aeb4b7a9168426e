use crate::model::Ticket;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_list(ctx: &CommandContext, json: bool) -> Result<()> {
    let tickets = ctx
        .block_on(ctx.client.list_tickets())?
        .map_err(|e| anyhow::anyhow!(e.list_message()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tickets)?);
    } else {
        print_ticket_list(&tickets);
    }
    Ok(())
}

fn print_ticket_list(tickets: &[Ticket]) {
    if tickets.is_empty() {
        println!("No tickets available.");
        return;
    }

    let id_width = tickets
        .iter()
        .map(|t| t.id.to_string().len())
        .max()
        .unwrap_or(1);

    for ticket in tickets {
        println!(
            "{} [{}] {} - {}",
            format!("{:>width$}", ticket.id, width = id_width).cyan(),
            ticket.status.blue(),
            ticket.subject.bold(),
            ticket.description_preview()
        );
    }
}
