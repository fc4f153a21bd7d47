//! Configurable URL parser.

use tracing::{debug, trace};

use crate::config::ParserConfig;
use crate::error::{ParseError, ParseErrorKind};
use crate::grammar;
use crate::url::ParsedUrl;

/// A URL parser with a [`ParserConfig`].
///
/// # Examples
///
/// ```
/// use url_components::{ParseErrorKind, ParserConfig, UrlParser};
///
/// let parser = UrlParser::with_config(ParserConfig::new().with_max_length(32));
/// assert!(parser.parse("https://example.com/").is_ok());
///
/// let err = parser.parse("https://example.com/a/rather/long/path").unwrap_err();
/// assert!(matches!(err.kind(), ParseErrorKind::TooLong { max: 32, .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlParser {
    config: ParserConfig,
}

impl UrlParser {
    /// Creates a parser with the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(ParserConfig::new())
    }

    /// Creates a parser with the given configuration.
    #[must_use]
    pub const fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses and validates a URL.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is longer than the configured maximum
    /// - The input does not match the URL grammar
    /// - The input matches but every component is empty
    pub fn parse(&self, input: &str) -> Result<ParsedUrl, ParseError> {
        match self.parse_inner(input) {
            Ok(url) => {
                trace!(len = input.len(), host_kind = ?url.host_kind(), "parsed URL");
                Ok(url)
            }
            Err(kind) => {
                debug!(len = input.len(), reason = %kind, "rejected URL");
                Err(ParseError::new(input, kind))
            }
        }
    }

    fn parse_inner(&self, input: &str) -> Result<ParsedUrl, ParseErrorKind> {
        if let Some(max) = self.config.max_length.filter(|&max| input.len() > max) {
            return Err(ParseErrorKind::TooLong {
                max,
                actual: input.len(),
            });
        }

        let captures = grammar::match_url(input).ok_or(ParseErrorKind::NoMatch)?;
        ParsedUrl::from_captures(&captures).ok_or(ParseErrorKind::NoComponents)
    }
}
