//! Submission state and channel handles
//!
//! Tracks the in-flight request and the derived loading flag, and polls
//! outcomes from the worker thread on each UI tick.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::SubmitHandler;
use super::worker::spawn_worker;

/// Request sent to the submit worker thread
#[derive(Debug)]
pub struct SubmitRequest {
    /// Trimmed, non-empty prompt text
    pub prompt: String,
    /// Unique ID for this request, used to filter stale outcomes
    pub request_id: u64,
}

/// Outcome received from the submit worker thread
#[derive(Debug)]
pub struct SubmitOutcome {
    pub request_id: u64,
    /// Handler result; the controller logs failures but otherwise treats
    /// both variants identically
    pub result: Result<(), String>,
}

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Submission state
pub struct SubmitState {
    request_tx: Sender<SubmitRequest>,
    outcome_rx: Receiver<SubmitOutcome>,
    next_request_id: u64,
    in_flight: Option<u64>,
    spinner_frame: usize,
}

impl SubmitState {
    /// Create the state and spawn the worker thread running `handler`
    pub fn new(handler: Box<dyn SubmitHandler>) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (outcome_tx, outcome_rx) = mpsc::channel();

        spawn_worker(handler, request_rx, outcome_tx);

        Self {
            request_tx,
            outcome_rx,
            next_request_id: 0,
            in_flight: None,
            spinner_frame: 0,
        }
    }

    /// Whether a submission is currently in flight
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Hand a prompt to the worker thread
    ///
    /// Callers must check `is_loading()` first; only one request may be in
    /// flight at a time.
    pub fn begin(&mut self, prompt: String) {
        debug_assert!(self.in_flight.is_none(), "submission already in flight");

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight = Some(request_id);

        log::debug!("Submitting request {request_id}: {prompt:?}");
        if self
            .request_tx
            .send(SubmitRequest { prompt, request_id })
            .is_err()
        {
            // Worker thread is gone; fail the submission rather than hang
            log::warn!("Submit worker disconnected before request {request_id}");
            self.in_flight = None;
        }
    }

    /// Poll for a completed submission; called from the UI tick
    ///
    /// Outcomes whose ID does not match the in-flight request are stale and
    /// discarded.
    pub fn poll_outcome(&mut self) -> Option<SubmitOutcome> {
        loop {
            match self.outcome_rx.try_recv() {
                Ok(outcome) => {
                    if self.in_flight == Some(outcome.request_id) {
                        self.in_flight = None;
                        return Some(outcome);
                    }
                    log::debug!("Discarding stale outcome for request {}", outcome.request_id);
                }
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    // Worker died with a request in flight; synthesize a
                    // failure so the UI does not stay busy forever
                    return self.in_flight.take().map(|request_id| {
                        log::warn!("Submit worker disconnected during request {request_id}");
                        SubmitOutcome {
                            request_id,
                            result: Err("submit worker disconnected".to_string()),
                        }
                    });
                }
            }
        }
    }

    /// Advance the busy spinner by one frame
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner_glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }
}

#[cfg(test)]
#[path = "submit_state_tests.rs"]
mod submit_state_tests;
