//! Stream-backed sink implementation

use crate::core::{Result, Severity, SeverityFilter, Sink, SinkType};
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Sink writing the exact message bytes to an underlying writer.
///
/// The writer is guarded by a sink-local lock, so one complete message is
/// atomic with respect to other threads writing through the same sink.
/// Relative ordering of distinct threads' messages is unspecified beyond
/// that. The severity check happens under the same lock, right before the
/// write.
pub struct StreamSink {
    stream: Mutex<Box<dyn Write + Send>>,
    filter: SeverityFilter,
}

impl StreamSink {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            stream: Mutex::new(Box::new(writer)),
            filter: SeverityFilter::default(),
        }
    }

    /// Open `path` in append mode behind a buffered writer.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_logger_tree::sinks::StreamSink;
    ///
    /// let sink = StreamSink::file("/var/log/app.log").unwrap();
    /// ```
    pub fn file(path: impl Into<PathBuf>) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.into())?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl Sink for StreamSink {
    fn sink_type(&self) -> SinkType {
        SinkType::Stream
    }

    fn write(&self, severity: Severity, message: &str) -> Result<()> {
        let mut stream = self.stream.lock();
        if self.filter.passes(severity) {
            stream.write_all(message.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.stream.lock().flush()?;
        Ok(())
    }

    fn severity(&self) -> Severity {
        self.filter.get()
    }

    fn set_severity(&self, severity: Severity) {
        self.filter.set(severity);
    }
}

impl Drop for StreamSink {
    fn drop(&mut self) {
        // Buffered writers lose tail data unless flushed
        let _ = self.stream.lock().flush();
    }
}
