//! Top-level key and paste event dispatch

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app_state::App;
use crate::prompt::handle_editing_key;

impl App {
    /// Handle a key press event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Esc / Ctrl+C: quit
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        // Plain Enter submits; Shift/Alt+Enter falls through as a line break
        if key.code == KeyCode::Enter
            && !key.modifiers.contains(KeyModifiers::SHIFT)
            && !key.modifiers.contains(KeyModifiers::ALT)
        {
            self.submit();
            return;
        }

        // Everything below edits state; dropped while disabled
        if self.disabled {
            return;
        }

        // Suggestion navigation while the panel is on screen
        if self.suggestions.is_shown(self.prompt.is_empty()) {
            match key.code {
                KeyCode::Left | KeyCode::Up => {
                    self.suggestions.select_prev();
                    return;
                }
                KeyCode::Right | KeyCode::Down => {
                    self.suggestions.select_next();
                    return;
                }
                KeyCode::Tab => {
                    self.accept_suggestion();
                    return;
                }
                _ => {}
            }
        }

        handle_editing_key(&mut self.prompt, key);
    }

    /// Handle bracketed paste: insert at the cursor, then re-apply the cap
    pub fn handle_paste_event(&mut self, text: String) {
        if self.disabled {
            return;
        }
        self.prompt.textarea.insert_str(text);
        self.prompt.enforce_limit();
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
