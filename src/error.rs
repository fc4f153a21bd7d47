//! Error types for URL parsing.

use std::fmt;

/// Error returned when a string is not a valid URL.
///
/// Every rejection renders the same way, `invalid URL syntax: '<input>'`.
/// The [`kind`](Self::kind) is available for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// Why the input was rejected
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the reason for the rejection.
    #[must_use]
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

/// Reasons a URL can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input does not satisfy the URL grammar
    NoMatch,
    /// The grammar matched but every component is empty
    NoComponents,
    /// The input is longer than the configured maximum
    TooLong {
        /// Maximum allowed length in bytes
        max: usize,
        /// Actual length in bytes
        actual: usize,
    },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => write!(f, "input does not match the URL grammar"),
            Self::NoComponents => write!(f, "input has no non-empty component"),
            Self::TooLong { max, actual } => {
                write!(f, "input length {actual} exceeds maximum {max}")
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid URL syntax: '{}'", self.input)?;
        if let ParseErrorKind::TooLong { .. } = self.kind {
            write!(f, " ({})", self.kind)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_and_empty_failures_render_identically() {
        let no_match = ParseError::new("x", ParseErrorKind::NoMatch);
        let empty = ParseError::new("x", ParseErrorKind::NoComponents);
        assert_eq!(no_match.to_string(), empty.to_string());
        assert_eq!(no_match.to_string(), "invalid URL syntax: 'x'");
    }

    #[test]
    fn too_long_mentions_limit() {
        let err = ParseError::new("abcdef", ParseErrorKind::TooLong { max: 4, actual: 6 });
        assert_eq!(
            err.to_string(),
            "invalid URL syntax: 'abcdef' (input length 6 exceeds maximum 4)"
        );
    }

    #[test]
    fn carries_input() {
        let err = ParseError::new("http://", ParseErrorKind::NoMatch);
        assert_eq!(err.input(), "http://");
        assert_eq!(err.kind(), &ParseErrorKind::NoMatch);
    }
}
