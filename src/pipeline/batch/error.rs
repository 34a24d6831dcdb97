//! Error taxonomy for batch statement ingestion.
//!
//! Two scopes, deliberately separate:
//! - `BatchError`: batch-level failures that abort the whole request
//!   (malformed request, fatal internal error). These cross the orchestrator
//!   boundary and map to HTTP responses.
//! - `EngineError`: document-level failures from one engine call (bad
//!   password, corrupt file, unrecognized layout). These never escape the
//!   per-document adapter; they are converted into failure entries in the
//!   aggregate result.

use thiserror::Error;

/// Batch-level failure. Only validation and fatal internal errors abort a
/// batch; everything document-scoped is data, not an error.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("{0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Failure of a single engine invocation for a single document.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parsing failed: {0}")]
    Pdf(String),

    #[error("document is password-protected and could not be decrypted")]
    Password,

    #[error("no transaction rows recognized in statement layout")]
    Layout,

    #[error("{0}")]
    Internal(String),
}
