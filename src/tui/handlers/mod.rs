//! Key handling, one module per panel plus the shell-wide bindings.
//!
//! Every handler returns the effects the key press produced.

mod dashboard;
mod form;
mod global;
mod status;

use crate::tui::app::{App, View};
use crate::tui::effects::Effect;
use crossterm::event::KeyEvent;

pub fn handle_key(app: &mut App, key: KeyEvent) -> Vec<Effect> {
    if let Some(effects) = global::handle_global(app, key) {
        return effects;
    }

    match app.active_view() {
        View::Form => app
            .form_mut()
            .map(|form| form::handle_form(form, key))
            .unwrap_or_default(),
        View::Status => app
            .status_mut()
            .map(|status| status::handle_status(status, key))
            .unwrap_or_default(),
        View::Dashboard => dashboard::handle_dashboard(app, key),
    }
}

/// Plain or shifted character input meant for a text field.
fn typed_char(key: &KeyEvent) -> Option<char> {
    use crossterm::event::{KeyCode, KeyModifiers};

    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}
