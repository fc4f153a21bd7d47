//! Host sub-matchers: IPv4 literal, bracketed IPv6 literal, domain name.
//!
//! # Grammar Reference
//!
//! ```abnf
//! host        = ipv4-public / ipv6-literal / domain
//! ipv4-public = first-octet "." octet "." octet "." last-octet
//! first-octet = 1-223, no leading zero
//! octet       = 0-255 written as 1*2DIGIT / "1" 2DIGIT / 200-255
//! last-octet  = 1-254, no leading zero
//! ipv6-literal = "[" IPv6address "]"
//! domain      = first-label *( "." label ) "." tld
//! first-label = alnum *( ( "-" / "_" ) alnum )
//! label       = alnum *( "-" alnum )
//! tld         = 2*letter
//! ```
//!
//! `alnum` is a run of ASCII letters, ASCII digits, or characters in
//! U+00A1..=U+FFFF; `letter` excludes the ASCII digits.
//!
//! Each matcher receives the whole input and a start offset and returns the
//! end offset of the host it recognizes there. A host can only be followed by
//! `:`, `/`, `?`, `#` or the end of input, none of which can be part of a
//! host, so every matcher consumes its maximal run of host characters and
//! validates it as a whole.

use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

use crate::constants::{EXCLUDED_IPV4_BLOCKS, MIN_TLD_LENGTH};

/// The kind of host a URL was matched with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HostKind {
    /// A domain name (e.g. "example.com")
    Domain,
    /// A public IPv4 literal (e.g. "8.8.8.8")
    Ipv4,
    /// A bracketed IPv6 literal (e.g. `[2001:db8::1]`)
    Ipv6,
}

impl HostKind {
    /// Returns the lowercase name of this host kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        }
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Yields every host recognized at `start`, in priority order.
pub(crate) fn candidates(input: &str, start: usize) -> impl Iterator<Item = (HostKind, usize)> {
    [
        match_ipv4(input, start).map(|end| (HostKind::Ipv4, end)),
        match_ipv6(input, start).map(|end| (HostKind::Ipv6, end)),
        match_domain(input, start).map(|end| (HostKind::Domain, end)),
    ]
    .into_iter()
    .flatten()
}

/// Matches a public IPv4 literal at `start`.
pub(crate) fn match_ipv4(input: &str, start: usize) -> Option<usize> {
    let rest = &input[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(rest.len());
    let literal = &rest[..len];

    let mut octets = literal.split('.');
    let (first, second, third, fourth) =
        (octets.next()?, octets.next()?, octets.next()?, octets.next()?);
    if octets.next().is_some() {
        return None;
    }

    let shaped = is_first_octet(first)
        && is_middle_octet(second)
        && is_middle_octet(third)
        && is_last_octet(fourth);
    if !shaped || is_excluded_ipv4(first, second) {
        return None;
    }

    Some(start + len)
}

/// Matches a bracketed IPv6 literal at `start`, brackets included.
pub(crate) fn match_ipv6(input: &str, start: usize) -> Option<usize> {
    let rest = input[start..].strip_prefix('[')?;
    let close = rest.find(']')?;
    let address = &rest[..close];

    // Zone identifiers and embedded IPv4 with leading zeros are refused by
    // the standard parser; both are outside the literal grammar.
    Ipv6Addr::from_str(address).ok()?;

    // '[' + address + ']'
    Some(start + close + 2)
}

/// Matches a domain name at `start`.
pub(crate) fn match_domain(input: &str, start: usize) -> Option<usize> {
    let rest = &input[start..];
    let len = rest
        .find(|c: char| !is_label_char(c) && !matches!(c, '.' | '-' | '_'))
        .unwrap_or(rest.len());
    let domain = &rest[..len];

    let mut labels: Vec<&str> = domain.split('.').collect();
    let tld = labels.pop()?;
    let (first, middle) = labels.split_first()?;

    let valid = is_label(first, &['-', '_'])
        && middle.iter().all(|label| is_label(label, &['-']))
        && is_tld(tld);

    valid.then_some(start + len)
}

fn is_first_octet(octet: &str) -> bool {
    is_unpadded(octet) && octet_value(octet).is_some_and(|v| (1..=223).contains(&v))
}

fn is_middle_octet(octet: &str) -> bool {
    match octet.len() {
        1 | 2 => octet.bytes().all(|b| b.is_ascii_digit()),
        3 => matches!(octet.as_bytes()[0], b'1' | b'2') && octet_value(octet).is_some_and(|v| v <= 255),
        _ => false,
    }
}

fn is_last_octet(octet: &str) -> bool {
    is_unpadded(octet) && octet_value(octet).is_some_and(|v| (1..=254).contains(&v))
}

fn is_unpadded(octet: &str) -> bool {
    (1..=3).contains(&octet.len()) && !octet.starts_with('0')
}

fn octet_value(octet: &str) -> Option<u16> {
    if octet.is_empty() || octet.len() > 3 || !octet.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    octet.parse().ok()
}

/// Private, loopback and link-local blocks, compared on the literal text.
fn is_excluded_ipv4(first: &str, second: &str) -> bool {
    let listed = EXCLUDED_IPV4_BLOCKS.iter().any(|block| match block {
        [a] => first == *a,
        [a, b] => first == *a && second == *b,
        _ => false,
    });

    // 172.16.0.0/12
    let private_172 = first == "172"
        && second.len() == 2
        && matches!(second.as_bytes(), [b'1', b'6'..=b'9'] | [b'2', b'0'..=b'9'] | [b'3', b'0' | b'1']);

    listed || private_172
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{a1}'..='\u{ffff}').contains(&c)
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_digit() || is_letter(c)
}

/// Alphanumeric runs joined by single separators from `separators`.
fn is_label(label: &str, separators: &[char]) -> bool {
    let mut previous_was_char = false;
    for c in label.chars() {
        if is_label_char(c) {
            previous_was_char = true;
        } else if separators.contains(&c) && previous_was_char {
            previous_was_char = false;
        } else {
            return false;
        }
    }
    previous_was_char
}

fn is_tld(tld: &str) -> bool {
    tld.chars().all(is_letter) && tld.chars().count() >= MIN_TLD_LENGTH
}

#[cfg(feature = "serde")]
impl serde::Serialize for HostKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
