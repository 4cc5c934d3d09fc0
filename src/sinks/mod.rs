//! Sink implementations and the sink factory

#[cfg(feature = "console")]
pub mod console;
pub mod noop;
pub mod stream;

#[cfg(feature = "console")]
pub use console::StdOutSink;
pub use noop::NoopSink;
pub use stream::StreamSink;

use crate::core::{LoggerError, Result, SinkHandle, SinkType};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Builds shared sink handles ready to attach to loggers.
pub struct SinkFactory;

impl SinkFactory {
    /// Build a sink from its kind alone.
    ///
    /// Kinds that need an external resource cannot be built this way:
    /// [`SinkType::Stream`] fails with [`LoggerError::UnsupportedSinkType`]
    /// since it needs a writer — use [`SinkFactory::stream`] or
    /// [`SinkFactory::file`] for those.
    pub fn create(kind: SinkType) -> Result<SinkHandle> {
        match kind {
            SinkType::Noop => Ok(Self::noop()),
            #[cfg(feature = "console")]
            SinkType::Console => Ok(Self::stdout()),
            SinkType::Stream => Err(LoggerError::unsupported_sink_type(
                "stream sinks need a writer; use SinkFactory::stream or SinkFactory::file",
            )),
        }
    }

    pub fn noop() -> SinkHandle {
        Arc::new(NoopSink::new())
    }

    pub fn stream<W: Write + Send + 'static>(writer: W) -> SinkHandle {
        Arc::new(StreamSink::new(writer))
    }

    pub fn file(path: impl Into<PathBuf>) -> Result<SinkHandle> {
        Ok(Arc::new(StreamSink::file(path)?))
    }

    #[cfg(feature = "console")]
    pub fn stdout() -> SinkHandle {
        Arc::new(StdOutSink::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_noop() {
        let sink = SinkFactory::create(SinkType::Noop).unwrap();
        assert_eq!(sink.sink_type(), SinkType::Noop);
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_create_console() {
        let sink = SinkFactory::create(SinkType::Console).unwrap();
        assert_eq!(sink.sink_type(), SinkType::Console);
    }

    #[test]
    fn test_create_stream_is_unsupported() {
        let err = SinkFactory::create(SinkType::Stream).unwrap_err();
        assert!(matches!(err, LoggerError::UnsupportedSinkType { .. }));
    }

    #[test]
    fn test_stream_factory_takes_any_writer() {
        let sink = SinkFactory::stream(Vec::<u8>::new());
        assert_eq!(sink.sink_type(), SinkType::Stream);
    }
}
