//! Batch orchestrator: drives one batch from request to aggregate result.
//!
//! Phases per batch: Validating → Processing → Aggregating → Done, or
//! Rejected (from Validating only). Processing fans documents out over a
//! bounded worker pool; each document runs extraction and identity
//! resolution on one blocking task, since the engines are synchronous.
//!
//! Progress events are emitted in input order regardless of completion
//! order: completed documents are buffered and the contiguous prefix is
//! flushed as it fills in, so `current` is the count of documents processed
//! and is monotonically non-decreasing.
//!
//! No retries: a failed document is surfaced in the result, not retried,
//! because statement failures (bad password, corrupt file) are rarely
//! transient.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use uuid::Uuid;

use super::adapter::run_extraction;
use super::error::BatchError;
use super::identity::resolve_identity;
use super::traits::{AccountExtractor, NameRecognizer, ProgressReporter, StatementEngine};
use super::types::{
    BatchConfig, BatchRequest, BatchResult, DocumentSheet, DocumentTask, ExtractionOutcome,
    IdentityResult, ProgressEvent,
};
use super::validate::validate;

/// Batch lifecycle phase, for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BatchPhase {
    Validating,
    Processing,
    Aggregating,
    Done,
    Rejected,
}

impl BatchPhase {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::Processing => "processing",
            Self::Aggregating => "aggregating",
            Self::Done => "done",
            Self::Rejected => "rejected",
        }
    }
}

/// Everything produced for one document during Processing.
struct DocumentOutcome {
    task: DocumentTask,
    outcome: ExtractionOutcome,
    identity: IdentityResult,
}

/// Orchestrates one batch at a time. Holds no per-batch state; safe to share
/// behind an `Arc` across requests.
pub struct BatchOrchestrator {
    engine: Arc<dyn StatementEngine>,
    names: Arc<dyn NameRecognizer>,
    accounts: Arc<dyn AccountExtractor>,
    reporter: Arc<dyn ProgressReporter>,
    config: BatchConfig,
}

impl BatchOrchestrator {
    pub fn new(
        engine: Arc<dyn StatementEngine>,
        names: Arc<dyn NameRecognizer>,
        accounts: Arc<dyn AccountExtractor>,
        reporter: Arc<dyn ProgressReporter>,
    ) -> Self {
        Self {
            engine,
            names,
            accounts,
            reporter,
            config: BatchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Run one batch to completion.
    ///
    /// Returns `Err` only for batch-level failures: a rejected request or a
    /// fatal internal error (e.g. a panicked document task). Per-document
    /// extraction failures are folded into the result.
    pub async fn run(&self, request: BatchRequest) -> Result<BatchResult, BatchError> {
        let batch_id = Uuid::new_v4();
        let total = request.document_count();

        tracing::info!(
            %batch_id,
            documents = total,
            phase = BatchPhase::Validating.as_str(),
            "Batch accepted"
        );

        if let Err(e) = validate(&request) {
            tracing::warn!(
                %batch_id,
                phase = BatchPhase::Rejected.as_str(),
                error = %e,
                "Batch rejected"
            );
            return Err(e);
        }

        if total == 0 {
            tracing::info!(%batch_id, phase = BatchPhase::Done.as_str(), "Empty batch");
            return Ok(BatchResult::default());
        }

        tracing::info!(
            %batch_id,
            phase = BatchPhase::Processing.as_str(),
            concurrency = self.config.max_concurrent_documents,
            "Processing documents"
        );

        let slots = self.process_documents(Arc::new(request), total).await?;

        tracing::debug!(%batch_id, phase = BatchPhase::Aggregating.as_str(), "Aggregating");
        let result = aggregate(slots)?;

        tracing::info!(
            %batch_id,
            phase = BatchPhase::Done.as_str(),
            extracted = result.sheets.len(),
            failed = result.failed_paths.len(),
            "Batch complete"
        );
        Ok(result)
    }

    /// Fan the documents out over a bounded pool, buffering completions so
    /// progress is emitted in input order.
    async fn process_documents(
        &self,
        request: Arc<BatchRequest>,
        total: usize,
    ) -> Result<Vec<Option<DocumentOutcome>>, BatchError> {
        let limit = self.config.max_concurrent_documents.max(1);
        let pool = Arc::new(Semaphore::new(limit));
        let mut workers: JoinSet<Result<(usize, DocumentOutcome), BatchError>> = JoinSet::new();

        for index in 0..total {
            let pool = pool.clone();
            let request = request.clone();
            let engine = self.engine.clone();
            let names = self.names.clone();
            let accounts = self.accounts.clone();

            workers.spawn(async move {
                let _permit = pool
                    .acquire_owned()
                    .await
                    .map_err(|e| BatchError::Internal(format!("worker pool closed: {e}")))?;

                let task = request.task(index);
                let owner_id = request.owner_id.clone();
                let outcome = tokio::task::spawn_blocking(move || {
                    let outcome = run_extraction(engine.as_ref(), &task, &owner_id);
                    let identity = resolve_identity(
                        names.as_ref(),
                        accounts.as_ref(),
                        &task.pdf_path,
                        index + 1,
                    );
                    DocumentOutcome {
                        task,
                        outcome,
                        identity,
                    }
                })
                .await
                .map_err(|e| BatchError::Internal(format!("document task failed: {e}")))?;

                Ok((index, outcome))
            });
        }

        let mut slots: Vec<Option<DocumentOutcome>> = (0..total).map(|_| None).collect();
        let mut emitted = 0;

        while let Some(joined) = workers.join_next().await {
            let (index, outcome) = joined
                .map_err(|e| BatchError::Internal(format!("document task panicked: {e}")))??;
            slots[index] = Some(outcome);

            // Flush progress for the contiguous completed prefix.
            while emitted < total {
                let Some(done) = slots[emitted].as_ref() else {
                    break;
                };
                emitted += 1;
                self.reporter.report(&ProgressEvent {
                    current: emitted,
                    total,
                    message: format!(
                        "Processed {} statement {}",
                        done.task.bank_name,
                        done.task.pdf_path.display()
                    ),
                });
            }
        }

        Ok(slots)
    }
}

/// Build the aggregate result, preserving input order. Every document index
/// lands in exactly one of sheets / failed paths, and identities carry one
/// entry per document.
fn aggregate(slots: Vec<Option<DocumentOutcome>>) -> Result<BatchResult, BatchError> {
    let mut result = BatchResult::default();

    for (index, slot) in slots.into_iter().enumerate() {
        let doc = slot.ok_or_else(|| {
            BatchError::Internal(format!("document {index} produced no result"))
        })?;

        match doc.outcome {
            ExtractionOutcome::Success { sheet } => result.sheets.push(DocumentSheet {
                label: format!("{} {}", doc.task.bank_name, index + 1),
                sheet,
            }),
            ExtractionOutcome::Failure { path, .. } => result.failed_paths.push(path),
        }
        result.identities.push(doc.identity);
    }

    Ok(result)
}
