//! Logger node implementation

use super::{
    error::Result,
    formatter::PatternFormatter,
    severity::Severity,
    sink::SinkHandle,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared handle to a logger node.
///
/// The registry hands these out; equality of handles (`Arc::ptr_eq`) is
/// equality of nodes.
pub type LoggerHandle = Arc<Logger>;

/// A named node of the logger tree.
///
/// A logger owns its severity, its ordered sink list and its formatter; the
/// sink *objects* behind the handles are shared with other nodes. Severity
/// and sinks are snapshotted from the nearest ancestor when the registry
/// creates the node, and never updated retroactively: reconfiguring an
/// ancestor afterwards does not touch this node unless a registry bulk
/// operation targets it.
pub struct Logger {
    name: String,
    severity: RwLock<Severity>,
    sinks: RwLock<Vec<SinkHandle>>,
    formatter: RwLock<PatternFormatter>,
}

impl Logger {
    /// Create a logger with the default severity ([`Severity::Trace`]),
    /// no sinks and a pass-through formatter.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_severity(name, Severity::default())
    }

    pub fn with_severity(name: impl Into<String>, severity: Severity) -> Self {
        Self::with_state(name, severity, Vec::new())
    }

    /// Create a logger from an inherited state snapshot.
    ///
    /// This is how the registry materializes a node: `severity` and `sinks`
    /// are the nearest ancestor's values at the moment of creation.
    pub fn with_state(name: impl Into<String>, severity: Severity, sinks: Vec<SinkHandle>) -> Self {
        Self {
            name: name.into(),
            severity: RwLock::new(severity),
            sinks: RwLock::new(sinks),
            formatter: RwLock::new(PatternFormatter::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn severity(&self) -> Severity {
        *self.severity.read()
    }

    /// Set this node's severity. Descendants are never cascaded into here;
    /// branch-wide changes go through the registry.
    pub fn set_severity(&self, severity: Severity) {
        *self.severity.write() = severity;
    }

    /// Append a sink; insertion order is write order, duplicates allowed.
    pub fn add_sink(&self, sink: SinkHandle) {
        self.sinks.write().push(sink);
    }

    /// Snapshot of the current sink list.
    pub fn sinks(&self) -> Vec<SinkHandle> {
        self.sinks.read().clone()
    }

    pub fn formatter(&self) -> PatternFormatter {
        self.formatter.read().clone()
    }

    pub fn set_formatter(&self, formatter: PatternFormatter) {
        *self.formatter.write() = formatter;
    }

    /// Log `message` at `severity`.
    ///
    /// Messages below this logger's severity are rejected before any
    /// formatting or I/O happens. Surviving messages are formatted once and
    /// fanned out to every attached sink; each sink still filters by its own
    /// threshold, so a logger-level pass does not guarantee every sink
    /// writes. Sink failures are reported to stderr and never propagate out
    /// of the hot path.
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        if severity < *self.severity.read() {
            return;
        }

        let formatted = self.formatter.read().format(&message.into());
        self.write_to_sinks(severity, &formatted);
    }

    fn write_to_sinks(&self, severity: Severity, message: &str) {
        for (idx, sink) in self.sinks.read().iter().enumerate() {
            if let Err(e) = sink.write(severity, message) {
                eprintln!(
                    "[LOGGER ERROR] Sink #{} failed for logger '{}': {}",
                    idx, self.name, e
                );
            }
        }
    }

    /// Flush every attached sink.
    pub fn flush(&self) -> Result<()> {
        for sink in self.sinks.read().iter() {
            sink.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(Severity::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Severity::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(Severity::Fatal, message);
    }
}
