//! Message formatting with optional pattern wrapping

/// Reserved token replaced by the raw message text in a pattern.
pub const MESSAGE_TOKEN: &str = "%(message)";

/// Wraps messages in a fixed pattern before they reach the sinks.
///
/// An empty pattern passes the message through untouched, which is the
/// default for every logger. A non-empty pattern is emitted verbatim with
/// every occurrence of [`MESSAGE_TOKEN`] replaced by the message. The
/// substitution is single-pass: a message that itself contains the token is
/// not expanded again.
///
/// Argument interpolation is not this type's concern; callers interpolate
/// with `format!` or the crate macros before logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternFormatter {
    pattern: String,
}

impl PatternFormatter {
    /// Create a pass-through formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter wrapping messages in `pattern`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_logger_tree::PatternFormatter;
    ///
    /// let formatter = PatternFormatter::with_pattern("<entry>%(message)</entry>");
    /// assert_eq!(formatter.format("hello"), "<entry>hello</entry>");
    /// ```
    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, message: &str) -> String {
        if self.pattern.is_empty() {
            return message.to_owned();
        }
        self.pattern.replace(MESSAGE_TOKEN, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_by_default() {
        let formatter = PatternFormatter::new();
        assert_eq!(formatter.format("unchanged"), "unchanged");
        assert_eq!(formatter.pattern(), "");
    }

    #[test]
    fn test_pattern_wraps_message() {
        let formatter = PatternFormatter::with_pattern("[log] %(message)\n");
        assert_eq!(formatter.format("boot"), "[log] boot\n");
    }

    #[test]
    fn test_repeated_token_substitution() {
        let formatter = PatternFormatter::with_pattern("%(message) and again %(message)");
        assert_eq!(formatter.format("x"), "x and again x");
    }

    #[test]
    fn test_message_containing_token_is_not_reexpanded() {
        let formatter = PatternFormatter::with_pattern(">> %(message)");
        assert_eq!(formatter.format("%(message)"), ">> %(message)");
    }

    #[test]
    fn test_pattern_without_token_discards_message() {
        let formatter = PatternFormatter::with_pattern("static line");
        assert_eq!(formatter.format("ignored"), "static line");
    }
}
