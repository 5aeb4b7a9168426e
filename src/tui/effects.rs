//! Effects and inbox events.
//!
//! The app state never performs I/O. Key presses and responses return
//! [`Effect`]s that the runtime executes on the tokio runtime; each effect
//! produces exactly one [`ApiEvent`] that is fed back into the app.
//!
//! Every request is tagged with the [`MountId`] of the panel that issued
//! it, so responses for a panel that has since been replaced can be
//! recognised and dropped.

use crate::client::{ApiResult, TicketClient};
use crate::model::{NewTicket, Ticket};

/// Identifies one lifetime of a visible panel.
pub type MountId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `POST /tickets`
    CreateTicket { mount: MountId, ticket: NewTicket },

    /// `GET /tickets/{id}`
    FetchTicket { mount: MountId, id: u64 },

    /// `GET /tickets`
    FetchTickets { mount: MountId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEvent {
    TicketCreated {
        mount: MountId,
        result: ApiResult<Ticket>,
    },
    TicketFetched {
        mount: MountId,
        result: ApiResult<Ticket>,
    },
    TicketsListed {
        mount: MountId,
        result: ApiResult<Vec<Ticket>>,
    },
}

impl Effect {
    pub fn mount(&self) -> MountId {
        match self {
            Effect::CreateTicket { mount, .. }
            | Effect::FetchTicket { mount, .. }
            | Effect::FetchTickets { mount } => *mount,
        }
    }

    /// Performs the request and wraps the outcome for the inbox.
    pub async fn execute(self, client: &TicketClient) -> ApiEvent {
        match self {
            Effect::CreateTicket { mount, ticket } => ApiEvent::TicketCreated {
                mount,
                result: client.create_ticket(&ticket).await,
            },
            Effect::FetchTicket { mount, id } => ApiEvent::TicketFetched {
                mount,
                result: client.get_ticket(id).await,
            },
            Effect::FetchTickets { mount } => ApiEvent::TicketsListed {
                mount,
                result: client.list_tickets().await,
            },
        }
    }
}
