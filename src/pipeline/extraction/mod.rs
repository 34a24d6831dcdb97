//! Bundled default engines.
//!
//! The orchestrator only depends on the traits in `pipeline::batch::traits`;
//! these are the stock implementations wired up at process start. They are
//! deliberately generic; they work off the PDF's embedded text layer and
//! make no assumptions about any particular bank's layout.

pub mod account;
pub mod ner;
pub mod statement;
pub mod text;

pub use account::RegexAccountExtractor;
pub use ner::PatternNameRecognizer;
pub use statement::TableStatementEngine;
