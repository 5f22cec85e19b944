//! Suggestion chip rendering
//!
//! Chips are laid out left to right and wrapped into rows by display width
//! so double-width characters do not overflow the panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use super::suggestion_state::SuggestionState;

/// Horizontal padding inside a chip plus the gap between chips
const CHIP_DECORATION_WIDTH: usize = 4;

/// Group chip indices into rows that fit within `width` display columns
///
/// A chip wider than the whole row still gets a row of its own rather than
/// being dropped.
fn layout_chip_rows(items: &[String], width: usize) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut row: Vec<usize> = Vec::new();
    let mut row_width = 0usize;

    for (i, item) in items.iter().enumerate() {
        let chip_width = item.width() + CHIP_DECORATION_WIDTH;
        if !row.is_empty() && row_width + chip_width > width {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        row.push(i);
        row_width += chip_width;
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

/// Panel height in rows: one header line plus one line per chip row
pub fn panel_height(suggestions: &SuggestionState, width: u16) -> u16 {
    1 + layout_chip_rows(suggestions.items(), width as usize).len() as u16
}

/// Render the suggestion panel
pub fn render_suggestions(suggestions: &SuggestionState, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = vec![Line::from(vec![
        Span::styled("💡 Try one of these", Style::default().fg(Color::Yellow)),
        Span::styled(
            "  (←/→ to pick, Tab to use)",
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    let selected = suggestions.selected_index();
    for row in layout_chip_rows(suggestions.items(), area.width as usize) {
        let mut spans: Vec<Span> = Vec::new();
        for i in row {
            let chip_style = if i == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            spans.push(Span::styled(
                format!(" {} ", suggestions.items()[i]),
                chip_style,
            ));
            spans.push(Span::raw("  "));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
