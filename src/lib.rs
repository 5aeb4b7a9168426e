//! # ticketdesk - a terminal front-end for a support-ticket backend
//!
//! ticketdesk talks JSON over HTTP to a ticket service that owns all ticket
//! data. It offers an interactive TUI with three panels and a small CLI for
//! scripting the same requests.
//!
//! ## Features
//!
//! - **Submit**: create a ticket from a subject and description
//! - **Status**: look up one ticket by its numeric ID
//! - **Dashboard**: list every ticket, descriptions shortened to 80 characters
//! - **Themes**: light and dark palettes, toggled at runtime
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive UI against a local backend
//! ticketdesk --api-base http://localhost:3001
//!
//! # Scripting
//! ticketdesk submit "Printer jammed" -d "Third floor, paper tray 2"
//! ticketdesk show 42
//! ticketdesk list --json
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`client`]: HTTP client for the ticket backend
//! - [`config`]: Configuration loading and base URL resolution
//! - [`error`]: Error types and result aliases
//! - [`model`]: Data models (Ticket, NewTicket)
//! - [`tui`]: Terminal user interface
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// HTTP client for the ticket backend.
pub mod client;

/// Configuration loading and management.
///
/// Handles `.ticketdesk.yml` discovery and the backend base URL.
pub mod config;

/// Error types and result aliases.
///
/// Defines `DeskError`, `ApiError` and the `Result<T>` alias.
pub mod error;

pub mod logging;

/// Data models for tickets.
pub mod model;

/// Terminal user interface.
///
/// Interactive TUI built with ratatui.
pub mod tui;

/// Input validation utilities.
///
/// Validates subjects, descriptions and ticket IDs before anything is sent.
pub mod validation;
