//! Trait seams between the orchestrator and its collaborators.
//!
//! Three engine traits cover the external work (transaction extraction,
//! name recognition, account-number extraction); `ProgressReporter` is the
//! observational sink. All four are object-safe so the orchestrator can be
//! assembled from trait objects and tests can substitute mocks.

use std::path::Path;

use super::error::EngineError;
use super::types::{AccountFields, DocumentTask, ProgressEvent, TransactionSheet};

/// Bank-statement transaction extraction engine. One call per document;
/// receives the document's password and date range via the task.
pub trait StatementEngine: Send + Sync {
    fn extract(
        &self,
        task: &DocumentTask,
        owner_id: &str,
    ) -> Result<TransactionSheet, EngineError>;
}

/// Named-entity recognizer for account holder names. Returns zero or more
/// candidates in the order the recognizer produced them.
pub trait NameRecognizer: Send + Sync {
    fn extract_names(&self, path: &Path) -> Result<Vec<String>, EngineError>;
}

/// Account-number / IFSC pattern extractor.
pub trait AccountExtractor: Send + Sync {
    fn extract_account(&self, path: &Path) -> Result<AccountFields, EngineError>;
}

/// Sink for progress ticks. Infallible by signature: reporting must never
/// affect orchestration correctness, and the orchestrator behaves
/// identically (modulo observability) with a no-op implementation.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: &ProgressEvent);
}
