use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use bank_statement_analyzer::api::{server, ApiContext};
use bank_statement_analyzer::config::{self, ServerConfig};
use bank_statement_analyzer::pipeline::batch::{BatchOrchestrator, LogReporter};
use bank_statement_analyzer::pipeline::extraction::{
    PatternNameRecognizer, RegexAccountExtractor, TableStatementEngine,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let server_config = ServerConfig::from_env();

    if let Err(e) = std::fs::create_dir_all(&server_config.saved_pdf_dir) {
        tracing::warn!(
            dir = %server_config.saved_pdf_dir.display(),
            error = %e,
            "Could not create saved-PDF directory"
        );
    }
    tracing::info!(
        dir = %server_config.saved_pdf_dir.display(),
        "Saved-PDF temp directory"
    );

    let orchestrator = BatchOrchestrator::new(
        Arc::new(TableStatementEngine::new()),
        Arc::new(PatternNameRecognizer::new()),
        Arc::new(RegexAccountExtractor::new()),
        Arc::new(LogReporter),
    );
    let ctx = ApiContext::new(Arc::new(orchestrator));

    if let Err(e) = server::run(&server_config, ctx).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
