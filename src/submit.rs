//! Submission: hands the trimmed draft to a caller-supplied handler
//!
//! The handler runs on a dedicated worker thread so the UI loop never
//! blocks; requests and outcomes travel over mpsc channels. At most one
//! submission is in flight at a time, guarded by the loading flag at the
//! call site. Outcomes are not distinguished by the controller: success and
//! failure both complete the submission (failures are only logged).

mod submit_state;
mod worker;

use thiserror::Error;

pub use submit_state::{SubmitOutcome, SubmitRequest, SubmitState};
pub use worker::spawn_worker;

/// Error reported by a submit handler
///
/// Deliberately opaque: the controller never inspects it, it only logs it.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct SubmitError(pub String);

/// The externally supplied submission handler
///
/// Implementations run on the worker thread and may block; the prompt UI
/// stays responsive while they do. Called only with non-empty, trimmed text.
pub trait SubmitHandler: Send + 'static {
    fn submit(&mut self, prompt: &str) -> Result<(), SubmitError>;
}
