//! Tests for the submit worker thread

use std::sync::mpsc;
use std::time::Duration;

use super::*;
use crate::submit::SubmitError;
use crate::test_utils::test_helpers::RecordingHandler;

struct FailingHandler;

impl SubmitHandler for FailingHandler {
    fn submit(&mut self, _prompt: &str) -> Result<(), SubmitError> {
        Err(SubmitError("backend unavailable".to_string()))
    }
}

#[test]
fn test_worker_invokes_handler_and_reports_success() {
    let (handler, submitted) = RecordingHandler::new();
    let (request_tx, request_rx) = mpsc::channel();
    let (outcome_tx, outcome_rx) = mpsc::channel();
    spawn_worker(Box::new(handler), request_rx, outcome_tx);

    request_tx
        .send(SubmitRequest {
            prompt: "Draw a circle".to_string(),
            request_id: 1,
        })
        .unwrap();

    let outcome = outcome_rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(outcome.request_id, 1);
    assert!(outcome.result.is_ok());
    assert_eq!(*submitted.lock().unwrap(), vec!["Draw a circle".to_string()]);
}

#[test]
fn test_worker_reports_handler_failure() {
    let (request_tx, request_rx) = mpsc::channel();
    let (outcome_tx, outcome_rx) = mpsc::channel();
    spawn_worker(Box::new(FailingHandler), request_rx, outcome_tx);

    request_tx
        .send(SubmitRequest {
            prompt: "anything".to_string(),
            request_id: 7,
        })
        .unwrap();

    let outcome = outcome_rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(outcome.request_id, 7);
    assert_eq!(outcome.result, Err("backend unavailable".to_string()));
}

#[test]
fn test_worker_processes_requests_in_order() {
    let (handler, submitted) = RecordingHandler::new();
    let (request_tx, request_rx) = mpsc::channel();
    let (outcome_tx, outcome_rx) = mpsc::channel();
    spawn_worker(Box::new(handler), request_rx, outcome_tx);

    for (id, prompt) in [(1, "first"), (2, "second"), (3, "third")] {
        request_tx
            .send(SubmitRequest {
                prompt: prompt.to_string(),
                request_id: id,
            })
            .unwrap();
    }

    for expected_id in 1..=3 {
        let outcome = outcome_rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(outcome.request_id, expected_id);
    }
    assert_eq!(
        *submitted.lock().unwrap(),
        vec!["first".to_string(), "second".to_string(), "third".to_string()]
    );
}

#[test]
fn test_worker_exits_when_request_channel_closes() {
    let (handler, _submitted) = RecordingHandler::new();
    let (request_tx, request_rx) = mpsc::channel::<SubmitRequest>();
    let (outcome_tx, outcome_rx) = mpsc::channel();
    spawn_worker(Box::new(handler), request_rx, outcome_tx);

    drop(request_tx);

    // Outcome sender is dropped when the worker loop returns
    assert!(outcome_rx.recv_timeout(Duration::from_secs(2)).is_err());
}
