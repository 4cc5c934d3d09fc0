//! Discarding sink

use crate::core::{Result, Severity, SeverityFilter, Sink, SinkType};

/// Sink that swallows everything it is given.
///
/// Useful as a placeholder while wiring a tree up, or to keep a logger's
/// sink list non-empty without producing output. It still carries a severity
/// threshold so it satisfies the full sink contract.
#[derive(Debug, Default)]
pub struct NoopSink {
    filter: SeverityFilter,
}

impl NoopSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sink for NoopSink {
    fn sink_type(&self) -> SinkType {
        SinkType::Noop
    }

    fn write(&self, _severity: Severity, _message: &str) -> Result<()> {
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn severity(&self) -> Severity {
        self.filter.get()
    }

    fn set_severity(&self, severity: Severity) {
        self.filter.set(severity);
    }
}
