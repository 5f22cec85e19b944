use ratatui::style::{Color, Style};
use tui_textarea::{CursorMove, TextArea};

use crate::config::PromptConfig;

/// Prompt draft state
///
/// Invariant: the stored text never exceeds `max_chars` characters; input
/// beyond the cap is truncated, never rejected.
pub struct PromptState {
    pub textarea: TextArea<'static>,
    max_chars: usize,
}

impl PromptState {
    pub fn new(config: &PromptConfig) -> Self {
        let mut textarea = TextArea::default();

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(config.placeholder.clone());
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

        Self {
            textarea,
            max_chars: config.max_chars,
        }
    }

    /// The full draft text, lines joined with newlines
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Whitespace-trimmed view of the draft, the form handed to the submit handler
    pub fn trimmed(&self) -> String {
        self.text().trim().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(|line| line.is_empty())
    }

    pub fn char_count(&self) -> usize {
        self.text().chars().count()
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Replace the draft with `raw`, keeping only the first `max_chars` characters
    pub fn set_text(&mut self, raw: &str) {
        let truncated: String = raw.chars().take(self.max_chars).collect();
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(truncated);
        self.textarea.move_cursor(CursorMove::End);
    }

    /// Empty the draft
    pub fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }

    /// Re-apply the character cap after an edit
    ///
    /// Truncation moves the cursor to the end of the kept text.
    pub fn enforce_limit(&mut self) {
        if self.char_count() > self.max_chars {
            let text = self.text();
            self.set_text(&text);
        }
    }
}

#[cfg(test)]
#[path = "prompt_state_tests.rs"]
mod prompt_state_tests;
