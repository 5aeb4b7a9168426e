//! Data models for ticketdesk.
//!
//! - [`Ticket`]: a ticket as returned by the backend
//! - [`NewTicket`]: the body posted to create a ticket

mod ticket;

pub use ticket::{DESCRIPTION_PREVIEW_LENGTH, NewTicket, Ticket, truncate_description};
