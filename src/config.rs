//! Configuration loading and types
//!
//! Settings are read from `<config_dir>/promptbox/config.toml`. A missing
//! file or missing sections fall back to defaults; a malformed file is an
//! error rather than a silent default.

mod loader;
mod types;

pub use loader::{default_config_path, load_config, load_config_from};
pub use types::{Config, FeedbackConfig, PromptConfig, SuggestionsConfig};
