//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use url_components::prelude::*;
//!
//! let url = ParsedUrl::parse("https://example.com/").unwrap();
//! assert_eq!(url.host_kind(), Some(HostKind::Domain));
//! ```

pub use crate::{
    // Core types
    Component, HostKind, ParsedUrl,
    // Parser
    ParserConfig, UrlParser,
    // Errors
    ParseError, ParseErrorKind, UnknownComponent,
    // Constants
    MAX_PORT, MIN_PORT, SCHEMES,
};
