//! promptbox - interactive terminal prompt composer
//!
//! A ratatui-based prompt entry component: a multi-line draft with a
//! character cap, suggestion chips, empty-input feedback, and a pluggable
//! asynchronous submit handler running on a background worker thread.

pub mod app;
pub mod config;
pub mod error;
pub mod feedback;
pub mod prompt;
pub mod submit;
pub mod suggestions;

#[cfg(test)]
pub mod test_utils;

pub use app::App;
pub use config::Config;
pub use error::PromptboxError;
pub use submit::{SubmitError, SubmitHandler};
