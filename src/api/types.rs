//! Shared API state and wire types.
//!
//! Wire field names follow the desktop client's existing payloads:
//! `start_date` / `end_date` are arrays (one entry per document), `ca_id` is
//! the requesting owner, and `ner_results` uses the display keys `"Name"` /
//! `"Acc Number"`.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::pipeline::batch::{BatchOrchestrator, BatchRequest, BatchResult};

/// State shared by all endpoint handlers.
#[derive(Clone)]
pub struct ApiContext {
    pub orchestrator: Arc<BatchOrchestrator>,
}

impl ApiContext {
    pub fn new(orchestrator: Arc<BatchOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

/// `POST /analyze-statements/` request body.
#[derive(Debug, Deserialize)]
pub struct AnalyzeStatementsRequest {
    pub bank_names: Vec<String>,
    pub pdf_paths: Vec<String>,
    #[serde(default)]
    pub passwords: Vec<String>,
    pub start_date: Vec<String>,
    pub end_date: Vec<String>,
    pub ca_id: String,
}

impl AnalyzeStatementsRequest {
    pub fn into_batch_request(self) -> BatchRequest {
        BatchRequest {
            bank_names: self.bank_names,
            pdf_paths: self.pdf_paths.into_iter().map(PathBuf::from).collect(),
            passwords: self.passwords,
            start_dates: self.start_date,
            end_dates: self.end_date,
            owner_id: self.ca_id,
        }
    }
}

/// Identity arrays in the response, order-aligned with the input documents.
#[derive(Debug, Serialize)]
pub struct NerResults {
    #[serde(rename = "Name")]
    pub names: Vec<String>,
    #[serde(rename = "Acc Number")]
    pub acc_numbers: Vec<String>,
}

/// `POST /analyze-statements/` success body.
#[derive(Debug, Serialize)]
pub struct AnalyzeStatementsResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data: serde_json::Value,
    pub pdf_paths_not_extracted: Vec<String>,
    pub ner_results: NerResults,
}

impl AnalyzeStatementsResponse {
    pub fn from_batch(result: BatchResult) -> Self {
        let mut data = serde_json::Map::new();
        for doc in result.sheets {
            let sheet = serde_json::to_value(&doc.sheet).unwrap_or(serde_json::Value::Null);
            data.insert(doc.label, sheet);
        }

        let (names, acc_numbers) = result
            .identities
            .into_iter()
            .map(|identity| (identity.name, identity.account_number))
            .unzip();

        Self {
            status: "success",
            message: "Bank statements analyzed successfully",
            data: serde_json::Value::Object(data),
            pdf_paths_not_extracted: result
                .failed_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            ner_results: NerResults { names, acc_numbers },
        }
    }
}
