//! Placeholder endpoints for workflows without a settled contract.
//!
//! The column-rectification flow (client corrects mis-detected columns and
//! resubmits one PDF) is not specified yet; the client only checks for a
//! success envelope. `/refresh/` and `/add-pdf/` are acknowledged no-ops
//! kept for client compatibility.

use axum::Json;
use serde_json::Value;

/// `POST /column-rectify-add-pdf/`: static success payload until the
/// rectification workflow is specified.
pub async fn column_rectify_add_pdf() -> Json<Value> {
    Json(serde_json::json!({
        "status": "success",
        "message": "Column rectification accepted"
    }))
}

/// `POST /refresh/`: acknowledged no-op.
pub async fn refresh() -> Json<Value> {
    Json(Value::Null)
}

/// `POST /add-pdf/`: acknowledged no-op.
pub async fn add_pdf() -> Json<Value> {
    Json(Value::Null)
}
