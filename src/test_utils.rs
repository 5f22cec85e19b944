#[cfg(test)]
pub mod test_helpers {
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::Config;
    use crate::submit::{SubmitError, SubmitHandler, SubmitOutcome, SubmitState};

    /// Submit handler that records every prompt it receives
    pub struct RecordingHandler {
        submitted: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingHandler {
        pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
            let submitted = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    submitted: submitted.clone(),
                },
                submitted,
            )
        }
    }

    impl SubmitHandler for RecordingHandler {
        fn submit(&mut self, prompt: &str) -> Result<(), SubmitError> {
            self.submitted.lock().unwrap().push(prompt.to_string());
            Ok(())
        }
    }

    /// Submit handler that sleeps before succeeding, to hold the loading state
    pub struct SlowHandler {
        pub delay: Duration,
        pub submitted: Arc<Mutex<Vec<String>>>,
    }

    impl SubmitHandler for SlowHandler {
        fn submit(&mut self, prompt: &str) -> Result<(), SubmitError> {
            std::thread::sleep(self.delay);
            self.submitted.lock().unwrap().push(prompt.to_string());
            Ok(())
        }
    }

    pub fn test_app() -> (App, Arc<Mutex<Vec<String>>>) {
        let (handler, submitted) = RecordingHandler::new();
        (App::new(&Config::default(), Box::new(handler)), submitted)
    }

    pub fn test_app_with_config(config: &Config) -> (App, Arc<Mutex<Vec<String>>>) {
        let (handler, submitted) = RecordingHandler::new();
        (App::new(config, Box::new(handler)), submitted)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Poll a SubmitState until an outcome arrives or the timeout passes
    pub fn wait_for_outcome(submit: &mut SubmitState, timeout_ms: u64) -> Option<SubmitOutcome> {
        let start = Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            if let Some(outcome) = submit.poll_outcome() {
                return Some(outcome);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    /// Tick the app until the in-flight submission completes
    ///
    /// Returns true if the submission finished within the timeout.
    pub fn wait_for_submission(app: &mut App, timeout_ms: u64) -> bool {
        let start = Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            app.on_tick();
            if !app.submit.is_loading() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }
}
