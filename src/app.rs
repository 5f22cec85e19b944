//! Application controller: composes the prompt, suggestions, feedback, and
//! submission states and drives the submission lifecycle
//!
//! Lifecycle: Idle, then on a valid submit Submitting, then back to Idle on
//! any outcome with the draft cleared and chips dismissed. Submitting an
//! empty draft stays Idle and arms the feedback pulse. There is no terminal
//! state; the controller is reusable across many submissions.

mod app_events;
mod app_render;
mod app_state;

pub use app_state::App;
