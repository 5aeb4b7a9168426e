use crate::tui::app::{App, View};
use crate::tui::effects::Effect;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle bindings available in every panel.
/// Returns `None` when the key is left to the active panel.
pub fn handle_global(app: &mut App, key: KeyEvent) -> Option<Vec<Effect>> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
            app.quit();
            Some(Vec::new())
        }
        KeyCode::Char('t') if ctrl => {
            app.toggle_theme();
            Some(Vec::new())
        }
        KeyCode::F(1) => Some(app.switch_view(View::Form)),
        KeyCode::F(2) => Some(app.switch_view(View::Status)),
        KeyCode::F(3) => Some(app.switch_view(View::Dashboard)),
        _ => None,
    }
}
