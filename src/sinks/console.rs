//! Stdout sink implementation

use crate::core::{Result, Severity, SeverityFilter, Sink, SinkType};
use colored::Colorize;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Sink writing to the process's standard output.
///
/// With colors enabled (the default) each message is tinted by its
/// severity's color before it is written; the text itself is passed through
/// otherwise untouched.
pub struct StdOutSink {
    stream: Mutex<io::Stdout>,
    filter: SeverityFilter,
    use_colors: bool,
}

impl StdOutSink {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            stream: Mutex::new(io::stdout()),
            filter: SeverityFilter::default(),
            use_colors,
        }
    }
}

impl Default for StdOutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StdOutSink {
    fn sink_type(&self) -> SinkType {
        SinkType::Console
    }

    fn write(&self, severity: Severity, message: &str) -> Result<()> {
        let mut stream = self.stream.lock();
        if self.filter.passes(severity) {
            if self.use_colors {
                write!(stream, "{}", message.color(severity.color_code()))?;
            } else {
                stream.write_all(message.as_bytes())?;
            }
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
