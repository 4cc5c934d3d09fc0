//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging through a logger
//! handle with automatic string formatting, similar to `println!` and
//! `format!`. There is no global logger; the handle always comes from a
//! registry (or a standalone [`Logger`](crate::Logger)).
//!
//! # Examples
//!
//! ```
//! use rust_logger_tree::prelude::*;
//! use rust_logger_tree::info;
//!
//! let registry = SharedLoggerTree::new();
//! let logger = registry.get_or_create("svc.http");
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_logger_tree::prelude::*;
/// # let logger = Logger::new("docs");
/// use rust_logger_tree::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_tree::prelude::*;
/// # let logger = Logger::new("docs");
/// use rust_logger_tree::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, Severity};

    #[test]
    fn test_log_macro() {
        let logger = Logger::new("macros");
        log!(logger, Severity::Info, "Test message");
        log!(logger, Severity::Info, "Formatted: {}", 42);
    }

    #[test]
    fn test_severity_macros() {
        let logger = Logger::new("macros");
        trace!(logger, "Trace message");
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        fatal!(logger, "Critical failure: {}", "system");
    }

    #[test]
    fn test_macro_through_handle() {
        let registry = crate::core::SharedLoggerTree::new();
        let logger = registry.get_or_create("macros.handle");
        info!(logger, "via handle {}", 1);
    }
}
