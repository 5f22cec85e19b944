/// Suggestion chip state
pub struct SuggestionState {
    items: Vec<String>,
    visible: bool,
    selected: usize,
}

impl SuggestionState {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            visible: true,
            selected: 0,
        }
    }

    /// Whether the panel should be on screen right now
    ///
    /// Visibility is derived: the panel needs chips to show, must not have
    /// been dismissed, and only appears while the draft is empty.
    pub fn is_shown(&self, draft_is_empty: bool) -> bool {
        self.visible && draft_is_empty && !self.items.is_empty()
    }

    /// Hide the panel for the rest of the session
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The currently highlighted chip text, if any chips exist
    pub fn selected(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.items.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.items.len() - 1);
        }
    }
}

#[cfg(test)]
#[path = "suggestion_state_tests.rs"]
mod suggestion_state_tests;
