//! Rendering tests against a test backend

use ratatui::{Terminal, backend::TestBackend};

use crate::test_utils::test_helpers::test_app;

fn draw(app: &mut crate::app::App) -> String {
    let backend = TestBackend::new(100, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();

    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_fresh_app_renders_prompt_box_and_chips() {
    let (mut app, _submitted) = test_app();
    let screen = draw(&mut app);

    assert!(screen.contains(" Prompt "));
    assert!(screen.contains("0/500"));
    assert!(screen.contains("Try one of these"));
    assert!(screen.contains("Create a circle that transforms into a square"));
}

#[test]
fn test_char_counter_tracks_draft_length() {
    let (mut app, _submitted) = test_app();
    app.prompt.set_text("hello");

    let screen = draw(&mut app);
    assert!(screen.contains("5/500"));
}

#[test]
fn test_chips_hidden_while_draft_has_text() {
    let (mut app, _submitted) = test_app();
    app.prompt.set_text("something");

    let screen = draw(&mut app);
    assert!(!screen.contains("Try one of these"));
}

#[test]
fn test_loading_shows_busy_label() {
    let (mut app, _submitted) = test_app();
    app.prompt.set_text("Draw a circle");

    // begin() marks loading synchronously; no tick, so the outcome is not
    // polled yet and the busy indicator is on screen
    app.submit();
    let screen = draw(&mut app);

    assert!(screen.contains("Generating animation"));
}

#[test]
fn test_pulse_shows_warning_in_title() {
    let (mut app, _submitted) = test_app();

    app.submit();
    let screen = draw(&mut app);

    assert!(screen.contains("type something first"));
}

#[test]
fn test_disabled_is_labelled() {
    let (mut app, _submitted) = test_app();
    app.disabled = true;

    let screen = draw(&mut app);
    assert!(screen.contains("Prompt (disabled)"));
}

#[test]
fn test_footer_hint_is_present() {
    let (mut app, _submitted) = test_app();
    let screen = draw(&mut app);
    assert!(screen.contains("Enter submit"));
}
