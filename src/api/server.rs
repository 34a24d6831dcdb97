//! API server lifecycle.
//!
//! Two entry points: `run` serves in the foreground until a shutdown signal
//! (the binary's path), and `start` binds, spawns the server in a background
//! task, and returns a handle with the bound address and a shutdown channel
//! (the test path; bind port 0 to get an ephemeral port).

use std::net::SocketAddr;

use tokio::sync::oneshot;

use crate::api::router::api_router;
use crate::api::types::ApiContext;
use crate::config::ServerConfig;

/// Handle to a running API server started with [`start`].
pub struct ApiServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServer {
    /// Shut down the server gracefully. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("API server shutdown signal sent");
        }
    }
}

/// Serve in the foreground until ctrl-c.
pub async fn run(config: &ServerConfig, ctx: ApiContext) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Bank statement analyzer API listening");

    axum::serve(listener, api_router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

/// Bind and spawn the server in a background task, returning a handle.
pub async fn start(config: &ServerConfig, ctx: ApiContext) -> std::io::Result<ApiServer> {
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    let app = api_router(ctx);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown = async move {
            let _ = shutdown_rx.await;
            tracing::info!("API server received shutdown signal");
        };

        tracing::info!(%addr, "API server started");
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
        {
            tracing::error!(error = %e, "API server error");
        }
        tracing::info!("API server stopped");
    });

    Ok(ApiServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::pipeline::batch::progress::NoopReporter;
    use crate::pipeline::batch::BatchOrchestrator;
    use crate::pipeline::extraction::{
        PatternNameRecognizer, RegexAccountExtractor, TableStatementEngine,
    };

    fn test_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            saved_pdf_dir: std::env::temp_dir().join("saved_pdf"),
        }
    }

    fn test_context() -> ApiContext {
        ApiContext::new(Arc::new(BatchOrchestrator::new(
            Arc::new(TableStatementEngine::new()),
            Arc::new(PatternNameRecognizer::new()),
            Arc::new(RegexAccountExtractor::new()),
            Arc::new(NoopReporter),
        )))
    }

    #[tokio::test]
    async fn start_serves_health_over_http() {
        let mut server = start(&test_config(), test_context())
            .await
            .expect("server should start");
        assert!(server.addr.port() > 0);

        let url = format!("http://{}/health", server.addr);
        let response = reqwest::get(&url).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let json: serde_json::Value = response.json().await.unwrap();
        assert_eq!(json["status"], "healthy");

        server.shutdown();
    }

    #[tokio::test]
    async fn unknown_route_is_404_over_http() {
        let mut server = start(&test_config(), test_context())
            .await
            .expect("server should start");

        let url = format!("http://{}/nope", server.addr);
        let response = reqwest::get(&url).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

        server.shutdown();
    }

    #[tokio::test]
    async fn analyzes_real_pdf_over_http() {
        let tmp = tempfile::tempdir().unwrap();
        let path = crate::pipeline::extraction::testpdf::write_pdf(
            tmp.path(),
            "hdfc.pdf",
            &[
                "HDFC BANK Statement of Account",
                "Account Holder: Ramesh Kumar",
                "A/C No: 123456789012 IFSC HDFC0001234",
                "01-04-2023 UPI PAYMENT GROCERIES 500.00 0.00 9,500.00",
                "02-04-2023 SALARY APRIL 0.00 2,000.00 11,500.00",
            ],
        );

        let mut server = start(&test_config(), test_context())
            .await
            .expect("server should start");

        let body = serde_json::json!({
            "bank_names": ["HDFC"],
            "pdf_paths": [path.to_string_lossy()],
            "passwords": [],
            "start_date": ["2023-04-01"],
            "end_date": ["2023-04-30"],
            "ca_id": "CA-1"
        });

        let response = reqwest::Client::new()
            .post(format!("http://{}/analyze-statements/", server.addr))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let json: serde_json::Value = response.json().await.unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["pdf_paths_not_extracted"].as_array().unwrap().len(), 0);
        assert_eq!(json["data"]["HDFC 1"]["rows"].as_array().unwrap().len(), 2);
        assert_eq!(json["ner_results"]["Name"][0], "Ramesh Kumar");
        assert_eq!(json["ner_results"]["Acc Number"][0], "123456789012");

        server.shutdown();
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let mut server = start(&test_config(), test_context())
            .await
            .expect("server should start");
        server.shutdown();
        server.shutdown();
    }
}
