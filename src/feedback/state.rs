use std::time::{Duration, Instant};

/// Timed, self-resetting pulse for rejected empty submissions
///
/// `trigger()` arms the pulse; `update()` disarms it once the configured
/// window has elapsed. Re-triggering while armed restarts the window.
pub struct FeedbackState {
    duration: Duration,
    armed_at: Option<Instant>,
}

impl FeedbackState {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            armed_at: None,
        }
    }

    /// Arm the pulse for one full window
    pub fn trigger(&mut self) {
        self.armed_at = Some(Instant::now());
    }

    /// Disarm the pulse if its window has elapsed; called from the UI tick
    pub fn update(&mut self) {
        if let Some(armed_at) = self.armed_at {
            if armed_at.elapsed() >= self.duration {
                self.armed_at = None;
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Horizontal jitter (0 or 1 columns) for the shake effect
    ///
    /// Alternates roughly every 80ms while the pulse is active so the view
    /// layer can nudge the input box sideways without keeping extra state.
    pub fn jitter_offset(&self) -> u16 {
        match self.armed_at {
            Some(armed_at) => ((armed_at.elapsed().as_millis() / 80) % 2) as u16,
            None => 0,
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
