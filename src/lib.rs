//! # Rust Logger Tree
//!
//! A hierarchical logger-tree registry: severity-filtered log emission
//! through a namespace hierarchy of logger nodes, created lazily and keyed
//! by dot-delimited names.
//!
//! ## Features
//!
//! - **Hierarchical Loggers**: asking for `svc.http.server` materializes the
//!   whole ancestor chain, each node snapshotting its parent's configuration
//! - **Bulk Reconfiguration**: severity and sinks can be changed for a whole
//!   branch or the entire tree in one call
//! - **Thread Safe**: a single registry lock linearizes creation; sinks
//!   guard their streams independently
//! - **Easy to Use**: simple and intuitive API, no global state
//!
//! ## Example
//!
//! ```
//! use rust_logger_tree::prelude::*;
//!
//! let registry = SharedLoggerTree::new();
//! registry.add_tree_sink(SinkFactory::noop());
//!
//! let logger = registry.get_or_create("svc.http");
//! logger.info("request handled");
//!
//! registry.set_branch_severity("svc", Severity::Error).unwrap();
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::StdOutSink;
    pub use crate::core::{
        LocalLoggerTree, Logger, LoggerError, LoggerHandle, LoggerTreeRegistry, NoopRawMutex,
        PatternFormatter, Result, Severity, SeverityFilter, SharedLoggerTree, Sink, SinkHandle,
        SinkType, DEFAULT_DELIMITER, DEFAULT_ROOT_NAME, MESSAGE_TOKEN,
    };
    pub use crate::sinks::{NoopSink, SinkFactory, StreamSink};
}

#[cfg(feature = "console")]
pub use crate::sinks::StdOutSink;
pub use crate::core::{
    LocalLoggerTree, Logger, LoggerError, LoggerHandle, LoggerTreeRegistry, NoopRawMutex,
    PatternFormatter, Result, Severity, SeverityFilter, SharedLoggerTree, Sink, SinkHandle,
    SinkType, DEFAULT_DELIMITER, DEFAULT_ROOT_NAME, MESSAGE_TOKEN,
};
pub use crate::sinks::{NoopSink, SinkFactory, StreamSink};
