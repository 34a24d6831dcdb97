//! Statement ingestion pipeline.
//!
//! One batch flows Validator → Orchestrator → {Identity Resolver, Extraction
//! Adapter} per document → aggregate result. Data flows strictly downward;
//! no component holds state across batches.
//!
//! Module boundaries follow the trait seams in `traits`:
//! - `validate`: structural request checks (fail-fast)
//! - `adapter`: engine call folded into an outcome value (never raises)
//! - `identity`: best-effort name/account resolution (never raises)
//! - `orchestrator`: fan-out, ordered progress, aggregation
//! - `progress`: stock `ProgressReporter` sinks

pub mod adapter;
pub mod error;
pub mod identity;
pub mod orchestrator;
pub mod progress;
pub mod traits;
pub mod types;
pub mod validate;

pub use error::{BatchError, EngineError};
pub use orchestrator::BatchOrchestrator;
pub use progress::{LogReporter, NoopReporter, RecordingReporter};
pub use traits::{AccountExtractor, NameRecognizer, ProgressReporter, StatementEngine};
pub use types::*;
pub use validate::validate;
