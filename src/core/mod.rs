//! Core logger-tree types and traits

pub mod error;
pub mod formatter;
pub mod logger;
pub mod registry;
pub mod severity;
pub mod sink;

pub use error::{LoggerError, Result};
pub use formatter::{PatternFormatter, MESSAGE_TOKEN};
pub use logger::{Logger, LoggerHandle};
pub use registry::{
    LocalLoggerTree, LoggerTreeRegistry, NoopRawMutex, SharedLoggerTree, DEFAULT_DELIMITER,
    DEFAULT_ROOT_NAME,
};
pub use severity::Severity;
pub use sink::{SeverityFilter, Sink, SinkHandle, SinkType};
