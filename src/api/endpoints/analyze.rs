//! `POST /analyze-statements/`: the batch ingestion endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{AnalyzeStatementsRequest, AnalyzeStatementsResponse, ApiContext};

/// Validate and process one batch of statement PDFs.
///
/// Partial failure is a 200: failed documents are listed in
/// `pdf_paths_not_extracted` alongside the successful sheets. Only a
/// malformed request (400) or a fatal internal error (500) aborts.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    Json(request): Json<AnalyzeStatementsRequest>,
) -> Result<Json<AnalyzeStatementsResponse>, ApiError> {
    tracing::info!(
        banks = ?request.bank_names,
        documents = request.pdf_paths.len(),
        ca_id = request.ca_id,
        "Received analyze-statements request"
    );

    let result = ctx.orchestrator.run(request.into_batch_request()).await?;

    Ok(Json(AnalyzeStatementsResponse::from_batch(result)))
}
