// Configuration type definitions

use serde::Deserialize;

/// Default character cap for the prompt draft
pub const DEFAULT_MAX_CHARS: usize = 500;

/// Default feedback pulse duration in milliseconds
pub const DEFAULT_FEEDBACK_MS: u64 = 500;

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

fn default_placeholder() -> String {
    "Describe the animation you want to create...".to_string()
}

fn default_feedback_ms() -> u64 {
    DEFAULT_FEEDBACK_MS
}

fn default_suggestion_prompts() -> Vec<String> {
    vec![
        "Create a circle that transforms into a square".to_string(),
        "Show the Pythagorean theorem with animated proof".to_string(),
        "Visualize binary search on a sorted array".to_string(),
        "Animate data flow from client to server to database".to_string(),
    ]
}

/// Prompt input configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct PromptConfig {
    /// Maximum number of characters kept in the draft; longer input is truncated
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Placeholder text shown while the draft is empty
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        PromptConfig {
            max_chars: DEFAULT_MAX_CHARS,
            placeholder: default_placeholder(),
        }
    }
}

/// Feedback pulse configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackConfig {
    /// How long the empty-input pulse stays active, in milliseconds
    #[serde(default = "default_feedback_ms")]
    pub duration_ms: u64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        FeedbackConfig {
            duration_ms: DEFAULT_FEEDBACK_MS,
        }
    }
}

/// Suggestion chips configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionsConfig {
    /// Example prompts offered before the first interaction
    #[serde(default = "default_suggestion_prompts")]
    pub prompts: Vec<String>,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        SuggestionsConfig {
            prompts: default_suggestion_prompts(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub prompt: PromptConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,

    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}
