//! Sink trait for log output destinations

use super::{error::Result, severity::Severity};
use parking_lot::RwLock;
use std::sync::Arc;

/// Kinds of sinks the crate ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkType {
    Noop,
    Stream,
    #[cfg(feature = "console")]
    Console,
}

/// Terminal destination for already-formatted log text.
///
/// Sinks are shared by reference across any number of logger nodes, so every
/// method takes `&self`; implementations guard their stream with a sink-local
/// lock, making one complete `write` atomic with respect to concurrent
/// writers. Each sink filters independently by its own severity threshold
/// (default [`Severity::Trace`]).
pub trait Sink: Send + Sync {
    fn sink_type(&self) -> SinkType;
    fn write(&self, severity: Severity, message: &str) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn severity(&self) -> Severity;
    fn set_severity(&self, severity: Severity);
}

/// Shared handle to a sink; lives as long as the last logger holding it.
pub type SinkHandle = Arc<dyn Sink>;

/// Severity threshold carried by every sink implementation.
///
/// Defaults to [`Severity::Trace`] so a fresh sink passes everything.
#[derive(Debug, Default)]
pub struct SeverityFilter {
    threshold: RwLock<Severity>,
}

impl SeverityFilter {
    pub fn new(threshold: Severity) -> Self {
        Self {
            threshold: RwLock::new(threshold),
        }
    }

    pub fn get(&self) -> Severity {
        *self.threshold.read()
    }

    pub fn set(&self, threshold: Severity) {
        *self.threshold.write() = threshold;
    }

    pub fn passes(&self, severity: Severity) -> bool {
        severity >= *self.threshold.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults_to_trace() {
        let filter = SeverityFilter::default();
        assert_eq!(filter.get(), Severity::Trace);
        assert!(filter.passes(Severity::Trace));
    }

    #[test]
    fn test_filter_threshold() {
        let filter = SeverityFilter::new(Severity::Warn);
        assert!(!filter.passes(Severity::Info));
        assert!(filter.passes(Severity::Warn));
        assert!(filter.passes(Severity::Fatal));
    }

    #[test]
    fn test_filter_is_mutable() {
        let filter = SeverityFilter::default();
        filter.set(Severity::Error);
        assert_eq!(filter.get(), Severity::Error);
        assert!(!filter.passes(Severity::Warn));
    }
}
