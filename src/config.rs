//! Configuration for [`UrlParser`](crate::UrlParser).

/// Configuration for a [`UrlParser`](crate::UrlParser).
///
/// The defaults accept exactly the inputs that
/// [`ParsedUrl::parse`](crate::ParsedUrl::parse) accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    /// Maximum input length in bytes.
    ///
    /// Longer inputs are rejected before matching.
    /// Default: None (no limit)
    pub max_length: Option<usize>,
}

impl ParserConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_length: None }
    }

    /// Sets the maximum input length in bytes.
    #[must_use]
    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Removes the input length limit.
    #[must_use]
    pub const fn without_max_length(mut self) -> Self {
        self.max_length = None;
        self
    }
}
