//! Progress reporter implementations.
//!
//! The orchestrator only knows the `ProgressReporter` trait; these are the
//! stock sinks. `RecordingReporter` exists so tests can assert on the exact
//! event sequence without a logging backend.

use std::sync::Mutex;

use super::traits::ProgressReporter;
use super::types::ProgressEvent;

/// Logs each tick through `tracing`, mirroring the service log line
/// `"{message} ({current}/{total})"`.
pub struct LogReporter;

impl ProgressReporter for LogReporter {
    fn report(&self, event: &ProgressEvent) {
        tracing::info!("{} ({}/{})", event.message, event.current, event.total);
    }
}

/// Discards all ticks.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: &ProgressEvent) {}
}

/// Captures every tick for later inspection.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, event: &ProgressEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(current: usize) -> ProgressEvent {
        ProgressEvent {
            current,
            total: 3,
            message: format!("Processed document {current}"),
        }
    }

    #[test]
    fn recording_reporter_keeps_order() {
        let reporter = RecordingReporter::new();
        reporter.report(&tick(1));
        reporter.report(&tick(2));
        reporter.report(&tick(3));

        let events = reporter.events();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events.iter().map(|e| e.current).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn noop_reporter_accepts_events() {
        NoopReporter.report(&tick(1));
    }
}
