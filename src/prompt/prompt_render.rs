//! Prompt input box rendering
//!
//! Renders the draft textarea with its border, character counter, busy
//! indicator, and feedback pulse styling (red border plus a one-column
//! horizontal jitter while the pulse is active).

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::App;

/// Render the prompt input box
pub fn render_prompt(app: &mut App, frame: &mut Frame, area: Rect) {
    let pulsing = app.feedback.is_active();

    let border_color = if pulsing {
        Color::Red
    } else if app.disabled {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let title = if app.disabled {
        Line::from(" Prompt (disabled) ")
    } else if pulsing {
        Line::from(vec![
            Span::raw(" Prompt "),
            Span::styled("type something first ", Style::default().fg(Color::Red)),
        ])
    } else {
        Line::from(" Prompt ")
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    // Character counter in the bottom-right border
    let count = app.prompt.char_count();
    let max = app.prompt.max_chars();
    let near_cap = count * 10 >= max * 9;
    let counter_color = if near_cap { Color::Yellow } else { Color::DarkGray };
    block = block.title_bottom(
        Line::from(Span::styled(
            format!(" {count}/{max} "),
            Style::default().fg(counter_color),
        ))
        .alignment(Alignment::Right),
    );

    // Busy indicator in the bottom-left border while a submission is in flight
    if app.submit.is_loading() {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {} Generating animation... ", app.submit.spinner_glyph()),
                Style::default().fg(Color::Magenta),
            ))
            .alignment(Alignment::Left),
        );
    }

    app.prompt.textarea.set_block(block);

    // Shake: nudge the box sideways while the pulse is active
    let jitter = app.feedback.jitter_offset().min(area.width);
    let draw_area = Rect {
        x: area.x + jitter,
        width: area.width - jitter,
        ..area
    };

    frame.render_widget(&app.prompt.textarea, draw_area);
}

#[cfg(test)]
#[path = "prompt_render_tests.rs"]
mod prompt_render_tests;
