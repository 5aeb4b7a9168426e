use super::typed_char;
use crate::tui::app::{FormField, FormState};
use crate::tui::effects::Effect;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle key events on the submission form
pub fn handle_form(form: &mut FormState, key: KeyEvent) -> Vec<Effect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        return form.submit().into_iter().collect();
    }

    match key.code {
        KeyCode::Tab => form.focus = form.focus.next(),
        KeyCode::BackTab => form.focus = form.focus.prev(),
        KeyCode::Enter => match form.focus {
            FormField::Subject => form.focus = FormField::Description,
            FormField::Description => form.insert_char('\n'),
            FormField::Submit => return form.submit().into_iter().collect(),
        },
        KeyCode::Backspace => form.delete_char(),
        _ => {
            if let Some(c) = typed_char(&key) {
                form.insert_char(c);
            }
        }
    }

    Vec::new()
}
