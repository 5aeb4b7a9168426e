//! Terminal user interface for ticketdesk.
//!
//! Three panels share the screen below a navigation header: the
//! submission form, the status viewer and the dashboard. Only one is
//! visible at a time.
//!
//! ## Usage
//!
//! ```bash
//! ticketdesk tui
//! ```
//!
//! ## Keybindings
//!
//! - `F1` / `F2` / `F3`: Submit Ticket / Ticket Status / Dashboard
//! - `Ctrl+T`: Toggle light/dark theme
//! - `Tab` / `Shift+Tab`: Move between form fields
//! - `Enter`: Next field, submit, or check status
//! - `Ctrl+S`: Submit the form
//! - `↑/↓`, `j/k`: Scroll the dashboard
//! - `r` / `F5`: Refresh the dashboard
//! - `q` / `Esc`: Quit from the dashboard
//! - `Ctrl+C` / `Ctrl+Q`: Quit

pub mod app;
pub mod effects;
mod handlers;
mod runtime;
pub mod theme;
mod ui;
mod ui_utils;
mod ui_views;

pub use runtime::run_tui;
