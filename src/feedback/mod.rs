//! Feedback pulse module for promptbox
//!
//! Provides the transient visual cue shown when an empty draft is submitted.
//! The pulse arms for a fixed window and disarms itself on the next tick
//! after the deadline passes; the prompt renderer consults it for styling.

mod state;

pub use state::FeedbackState;
