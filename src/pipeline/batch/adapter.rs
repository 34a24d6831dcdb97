//! Per-document extraction adapter.
//!
//! Total function over the engine call: every document-level failure (wrong
//! password, corrupt file, unsupported layout, engine-internal error) is
//! converted into `ExtractionOutcome::Failure` so the batch can continue.
//! Only panics (programmer errors) propagate, and the orchestrator turns
//! those into a batch-fatal error.

use super::traits::StatementEngine;
use super::types::{DocumentTask, ExtractionOutcome};

/// Run the extraction engine for one document and fold the result into an
/// outcome value.
pub fn run_extraction(
    engine: &dyn StatementEngine,
    task: &DocumentTask,
    owner_id: &str,
) -> ExtractionOutcome {
    match engine.extract(task, owner_id) {
        Ok(sheet) => {
            tracing::info!(
                bank = task.bank_name,
                path = %task.pdf_path.display(),
                rows = sheet.rows.len(),
                "Statement extracted"
            );
            ExtractionOutcome::Success { sheet }
        }
        Err(e) => {
            tracing::warn!(
                bank = task.bank_name,
                path = %task.pdf_path.display(),
                error = %e,
                "Statement extraction failed"
            );
            ExtractionOutcome::Failure {
                path: task.pdf_path.clone(),
                reason: e.to_string(),
            }
        }
    }
}
