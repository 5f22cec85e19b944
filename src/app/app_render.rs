//! Top-level layout and rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use super::app_state::App;
use crate::prompt::render_prompt;
use crate::suggestions::{panel_height, render_suggestions};

/// Height of the prompt box including its borders
const PROMPT_HEIGHT: u16 = 7;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let suggestions_shown = self.suggestions.is_shown(self.prompt.is_empty());
        let suggestions_height = if suggestions_shown {
            panel_height(&self.suggestions, frame.area().width)
        } else {
            0
        };

        let layout = Layout::vertical([
            Constraint::Length(PROMPT_HEIGHT),
            Constraint::Length(suggestions_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        render_prompt(self, frame, layout[0]);

        if suggestions_shown {
            render_suggestions(&self.suggestions, frame, layout[1]);
        }

        let hint = Paragraph::new(Line::from(
            " Enter submit | Shift+Enter newline | Esc quit ",
        ))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, layout[3]);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
