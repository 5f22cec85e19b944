//! Prompt draft: the in-progress, uncommitted text being composed
//!
//! Owns the textarea widget, enforces the character cap by silent
//! truncation, and renders the input box with its char counter, busy
//! spinner, and feedback pulse styling.

mod prompt_events;
mod prompt_render;
mod prompt_state;

pub use prompt_events::handle_editing_key;
pub use prompt_render::render_prompt;
pub use prompt_state::PromptState;
