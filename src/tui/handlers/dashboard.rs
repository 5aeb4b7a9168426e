use crate::tui::app::App;
use crate::tui::effects::Effect;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle key events on the dashboard
pub fn handle_dashboard(app: &mut App, key: KeyEvent) -> Vec<Effect> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('r') | KeyCode::F(5) => return app.refresh_dashboard(),
        _ => {
            if let Some(dashboard) = app.dashboard_mut() {
                match key.code {
                    KeyCode::Down | KeyCode::Char('j') => dashboard.next(),
                    KeyCode::Up | KeyCode::Char('k') => dashboard.previous(),
                    KeyCode::Home | KeyCode::Char('g') => dashboard.first(),
                    KeyCode::End | KeyCode::Char('G') => dashboard.last(),
                    _ => {}
                }
            }
        }
    }

    Vec::new()
}
