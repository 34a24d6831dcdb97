//! API route table.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Handlers use `State<ApiContext>`; there is no middleware stack; the
//! service sits on a loopback/desktop boundary.

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the service router.
pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route(
            "/",
            get(endpoints::health::alive).post(endpoints::health::echo),
        )
        .route("/health", get(endpoints::health::check))
        .route("/analyze-statements/", post(endpoints::analyze::analyze))
        .route(
            "/column-rectify-add-pdf/",
            post(endpoints::rectify::column_rectify_add_pdf),
        )
        .route("/refresh/", post(endpoints::rectify::refresh))
        .route("/add-pdf/", post(endpoints::rectify::add_pdf))
        .with_state(ctx)
}
