//! Component selectors.

use std::fmt;
use std::str::FromStr;

/// One of the eight named pieces of a URL, in canonical order.
///
/// # Examples
///
/// ```
/// use url_components::Component;
///
/// assert_eq!("pass".parse::<Component>(), Ok(Component::Pass));
/// assert_eq!(Component::Fragment.to_string(), "fragment");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Component {
    /// The scheme, without `://`
    Scheme,
    /// The credentials user name
    User,
    /// The credentials password
    Pass,
    /// The host, IPv6 brackets included
    Host,
    /// The port, as decimal text
    Port,
    /// The path, leading slash included
    Path,
    /// The query string, without `?`
    Query,
    /// The fragment, without `#`
    Fragment,
}

impl Component {
    /// All components in canonical order.
    pub const ALL: [Self; 8] = [
        Self::Scheme,
        Self::User,
        Self::Pass,
        Self::Host,
        Self::Port,
        Self::Path,
        Self::Query,
        Self::Fragment,
    ];

    /// Returns the lowercase name of this component.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::User => "user",
            Self::Pass => "pass",
            Self::Host => "host",
            Self::Port => "port",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }

    /// Looks up a component by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown component name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownComponent {
    /// The name that was not recognized
    pub name: String,
}

impl fmt::Display for UnknownComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown URL component '{}'; expected one of scheme, user, pass, host, port, path, query, fragment",
            self.name
        )
    }
}

impl std::error::Error for UnknownComponent {}

impl FromStr for Component {
    type Err = UnknownComponent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownComponent { name: s.to_string() })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Component {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Component {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for component in Component::ALL {
            assert_eq!(component.as_str().parse::<Component>(), Ok(component));
        }
    }

    #[test]
    fn unknown_name_fails() {
        assert_eq!(Component::from_name("password"), None);
        assert_eq!(Component::from_name("Host"), None);
        let err = "userinfo".parse::<Component>().unwrap_err();
        assert_eq!(err.name, "userinfo");
    }

    #[test]
    fn canonical_order() {
        let mut sorted = Component::ALL;
        sorted.sort();
        assert_eq!(sorted, Component::ALL);
    }
}
