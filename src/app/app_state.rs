use std::time::Duration;

use crate::config::Config;
use crate::feedback::FeedbackState;
use crate::prompt::PromptState;
use crate::submit::{SubmitHandler, SubmitState};
use crate::suggestions::SuggestionState;

/// Application state
pub struct App {
    pub prompt: PromptState,
    pub suggestions: SuggestionState,
    pub feedback: FeedbackState,
    pub submit: SubmitState,
    /// Caller-supplied kill switch: disables submission and editing
    pub disabled: bool,
    pub should_quit: bool,
}

impl App {
    /// Create a new App wired to the given submit handler
    pub fn new(config: &Config, handler: Box<dyn SubmitHandler>) -> Self {
        Self {
            prompt: PromptState::new(&config.prompt),
            suggestions: SuggestionState::new(config.suggestions.prompts.clone()),
            feedback: FeedbackState::new(Duration::from_millis(config.feedback.duration_ms)),
            submit: SubmitState::new(handler),
            disabled: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Attempt to submit the current draft
    ///
    /// Preconditions, in order: an empty trimmed draft arms the feedback
    /// pulse and nothing else happens; while loading or disabled the call is
    /// silently ignored. Otherwise the trimmed text goes to the handler.
    pub fn submit(&mut self) {
        let trimmed = self.prompt.trimmed();
        if trimmed.is_empty() {
            self.feedback.trigger();
            return;
        }
        if self.submit.is_loading() || self.disabled {
            return;
        }
        self.submit.begin(trimmed);
    }

    /// Periodic tick: expire timers, animate the spinner, poll outcomes
    ///
    /// Any submission outcome, success or failure alike, clears the draft
    /// and dismisses the suggestion panel; failures are only logged.
    pub fn on_tick(&mut self) {
        self.feedback.update();
        if self.submit.is_loading() {
            self.submit.tick_spinner();
        }
        if let Some(outcome) = self.submit.poll_outcome() {
            if let Err(message) = &outcome.result {
                log::debug!("Submission {} failed: {message}", outcome.request_id);
            }
            self.prompt.clear();
            self.suggestions.dismiss();
        }
    }

    /// Accept the highlighted suggestion chip into the draft
    pub fn accept_suggestion(&mut self) {
        if let Some(text) = self.suggestions.selected().map(str::to_string) {
            self.prompt.set_text(&text);
            self.suggestions.dismiss();
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
