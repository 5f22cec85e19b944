//! Key handling for the prompt editor

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::prompt_state::PromptState;

/// Handle an editing key in the prompt textarea
///
/// Enter only reaches here when Shift or Alt is held (plain Enter submits
/// and is intercepted upstream); it inserts a line break. Every edit
/// re-enforces the character cap.
pub fn handle_editing_key(prompt: &mut PromptState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter
            if key.modifiers.contains(KeyModifiers::SHIFT)
                || key.modifiers.contains(KeyModifiers::ALT) =>
        {
            prompt.textarea.insert_newline();
        }
        // Plain Enter is the submit key; never treat it as an edit
        KeyCode::Enter => {}
        _ => {
            prompt.textarea.input(key);
        }
    }
    prompt.enforce_limit();
}

#[cfg(test)]
#[path = "prompt_events_tests.rs"]
mod prompt_events_tests;
