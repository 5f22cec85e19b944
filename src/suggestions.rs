//! Suggestion chips: predefined example prompts offered before first use
//!
//! The panel is visible while the draft is empty and no suggestion has been
//! accepted and no submission has completed; after either of those it stays
//! hidden for the life of the session.

mod suggestion_render;
mod suggestion_state;

pub use suggestion_render::{panel_height, render_suggestions};
pub use suggestion_state::SuggestionState;
