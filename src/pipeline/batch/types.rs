//! Core types for batch statement ingestion.
//!
//! These model the full lifecycle of one client-submitted batch:
//! BatchRequest → DocumentTask (per index) → ExtractionOutcome +
//! IdentityResult (per document) → BatchResult (aggregate).

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Account number placeholder used when pattern extraction finds nothing.
pub const PLACEHOLDER_ACCOUNT: &str = "XXXXXXXXXXX";

// ═══════════════════════════════════════════
// Batch request (input)
// ═══════════════════════════════════════════

/// One client-submitted set of statement documents, immutable once built.
///
/// The four positional sequences (`bank_names`, `pdf_paths`, `start_dates`,
/// `end_dates`) describe one logical document per index. `passwords` is
/// either empty (no password for any document) or aligned with `pdf_paths`;
/// the validator enforces both invariants before any engine work starts.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub bank_names: Vec<String>,
    pub pdf_paths: Vec<PathBuf>,
    pub passwords: Vec<String>,
    pub start_dates: Vec<String>,
    pub end_dates: Vec<String>,
    pub owner_id: String,
}

impl BatchRequest {
    /// Number of documents in the batch.
    pub fn document_count(&self) -> usize {
        self.pdf_paths.len()
    }

    /// Derive the per-document view for index `i`.
    ///
    /// Only valid after validation: indexes into the positionally aligned
    /// sequences, falling back to empty fields rather than panicking if a
    /// sequence is short.
    pub fn task(&self, index: usize) -> DocumentTask {
        DocumentTask {
            index,
            bank_name: self.bank_names.get(index).cloned().unwrap_or_default(),
            pdf_path: self.pdf_paths.get(index).cloned().unwrap_or_default(),
            password: self
                .passwords
                .get(index)
                .filter(|p| !p.is_empty())
                .cloned(),
            start_date: self.start_dates.get(index).cloned().unwrap_or_default(),
            end_date: self.end_dates.get(index).cloned().unwrap_or_default(),
        }
    }
}

/// Ephemeral view of one document within a batch, created by the
/// orchestrator while iterating.
#[derive(Debug, Clone)]
pub struct DocumentTask {
    pub index: usize,
    pub bank_name: String,
    pub pdf_path: PathBuf,
    pub password: Option<String>,
    pub start_date: String,
    pub end_date: String,
}

// ═══════════════════════════════════════════
// Per-document results
// ═══════════════════════════════════════════

/// Best-effort identity metadata for one document. Always produced, with
/// synthesized placeholders when resolution yields nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityResult {
    pub name: String,
    pub account_number: String,
}

/// Structured account fields returned by the account/IFSC extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountFields {
    pub acc: Option<String>,
    pub ifsc: Option<String>,
}

/// One parsed statement line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub date: NaiveDate,
    pub description: String,
    pub debit: Option<f64>,
    pub credit: Option<f64>,
    pub balance: Option<f64>,
}

/// Structured transaction table for one successfully extracted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSheet {
    pub rows: Vec<TransactionRow>,
    pub total_debit: f64,
    pub total_credit: f64,
}

impl TransactionSheet {
    pub fn from_rows(rows: Vec<TransactionRow>) -> Self {
        let total_debit = rows.iter().filter_map(|r| r.debit).sum();
        let total_credit = rows.iter().filter_map(|r| r.credit).sum();
        Self {
            rows,
            total_debit,
            total_credit,
        }
    }
}

/// Outcome of running the extraction engine on one document. A failure here
/// is data, not an exception: the batch continues.
#[derive(Debug, Clone)]
pub enum ExtractionOutcome {
    Success { sheet: TransactionSheet },
    Failure { path: PathBuf, reason: String },
}

// ═══════════════════════════════════════════
// Aggregate result
// ═══════════════════════════════════════════

/// A successfully extracted sheet, labelled for the response mapping.
#[derive(Debug, Clone)]
pub struct DocumentSheet {
    /// `"{bank_name} {n}"` where n is the document's 1-based batch position.
    pub label: String,
    pub sheet: TransactionSheet,
}

/// Aggregate outcome of one batch. Every input index appears in exactly one
/// of `sheets` / `failed_paths`; `identities` holds one entry per input
/// document. All sequences preserve input order.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub sheets: Vec<DocumentSheet>,
    pub failed_paths: Vec<PathBuf>,
    pub identities: Vec<IdentityResult>,
}

// ═══════════════════════════════════════════
// Progress + configuration
// ═══════════════════════════════════════════

/// Observational progress tick. `current` is the count of documents
/// processed so far; `total` is fixed for the batch's duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub current: usize,
    pub total: usize,
    pub message: String,
}

/// Tunables for batch processing.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Upper bound on documents processed concurrently. The default of 1
    /// serializes all calls into the engines, which are assumed
    /// non-reentrant-safe unless the caller knows otherwise.
    pub max_concurrent_documents: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrent_documents: 1,
        }
    }
}
