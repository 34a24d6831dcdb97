//! Liveness endpoints.

use axum::response::Html;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// `GET /health`: liveness probe, no side effects.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// `GET /`: human-readable liveness page.
pub async fn alive() -> Html<&'static str> {
    Html("<h1>Yes, I am alive!</h1>")
}

/// `POST /`: connectivity echo used by the desktop client on startup.
pub async fn echo(body: String) -> Json<serde_json::Value> {
    tracing::debug!(bytes = body.len(), "Root echo");
    Json(serde_json::json!({ "message": "Bank Statement Analyzer API" }))
}
