use super::typed_char;
use crate::tui::app::StatusState;
use crate::tui::effects::Effect;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle key events on the status viewer
pub fn handle_status(status: &mut StatusState, key: KeyEvent) -> Vec<Effect> {
    match key.code {
        KeyCode::Enter => return status.submit().into_iter().collect(),
        KeyCode::Backspace => status.delete_char(),
        KeyCode::Esc => status.ticket_id.clear(),
        _ => {
            if let Some(c) = typed_char(&key) {
                status.insert_char(c);
            }
        }
    }

    Vec::new()
}
