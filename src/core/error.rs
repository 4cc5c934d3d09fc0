//! Error types for the logger tree

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Branch-targeted registry operation referenced an absent name
    #[error("no logger with key \"{key}\" registered")]
    UnregisteredKey { key: String },

    /// Severity could not be derived from text or a raw ordinal
    #[error("the given severity could not be parsed: '{value}'")]
    SeverityParse { value: String },

    /// Sink factory was asked for a kind it cannot build
    #[error("the given sink type is not supported: {message}")]
    UnsupportedSinkType { message: String },

    /// IO error from a sink's underlying stream
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an unregistered-key error
    pub fn unregistered_key(key: impl Into<String>) -> Self {
        LoggerError::UnregisteredKey { key: key.into() }
    }

    /// Create a severity parse error
    pub fn severity_parse(value: impl Into<String>) -> Self {
        LoggerError::SeverityParse {
            value: value.into(),
        }
    }

    /// Create an unsupported sink type error
    pub fn unsupported_sink_type(message: impl Into<String>) -> Self {
        LoggerError::UnsupportedSinkType {
            message: message.into(),
        }
    }

    /// Whether this error originated in the registry
    pub fn is_registry_error(&self) -> bool {
        matches!(self, LoggerError::UnregisteredKey { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::unregistered_key("svc.http");
        assert!(matches!(err, LoggerError::UnregisteredKey { .. }));
        assert!(err.is_registry_error());

        let err = LoggerError::unsupported_sink_type("stream sinks need a writer");
        assert!(matches!(err, LoggerError::UnsupportedSinkType { .. }));
        assert!(!err.is_registry_error());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::unregistered_key("svc.http");
        assert_eq!(
            err.to_string(),
            "no logger with key \"svc.http\" registered"
        );

        let err = LoggerError::severity_parse("verbose");
        assert_eq!(
            err.to_string(),
            "the given severity could not be parsed: 'verbose'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::IoError(_)));
    }
}
