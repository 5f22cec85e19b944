//! Submit worker thread
//!
//! Runs the caller-supplied handler off the UI thread. Receives requests
//! via channel, invokes the handler, and sends the outcome back to the main
//! thread. The thread exits when the request channel closes.

use std::sync::mpsc::{Receiver, Sender};

use super::SubmitHandler;
use super::submit_state::{SubmitOutcome, SubmitRequest};

/// Spawn the submit worker thread
pub fn spawn_worker(
    handler: Box<dyn SubmitHandler>,
    request_rx: Receiver<SubmitRequest>,
    outcome_tx: Sender<SubmitOutcome>,
) {
    std::thread::spawn(move || {
        worker_loop(handler, request_rx, outcome_tx);
    });
}

/// Main worker loop: processes requests until the channel is closed
fn worker_loop(
    mut handler: Box<dyn SubmitHandler>,
    request_rx: Receiver<SubmitRequest>,
    outcome_tx: Sender<SubmitOutcome>,
) {
    while let Ok(request) = request_rx.recv() {
        let SubmitRequest { prompt, request_id } = request;
        log::debug!("Worker handling request {request_id}");

        let result = handler.submit(&prompt).map_err(|e| e.to_string());
        if let Err(message) = &result {
            log::debug!("Request {request_id} failed: {message}");
        }

        if outcome_tx.send(SubmitOutcome { request_id, result }).is_err() {
            // Main thread disconnected
            return;
        }
    }

    log::debug!("Submit worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
