//! URL grammar matcher.
//!
//! # Grammar Reference
//!
//! ```abnf
//! url          = [ host-section ] [ path ] [ "?" query ] [ "#" fragment ]
//! host-section = [ prefix [ credentials ] ] host [ ":" port ]
//! prefix       = ( "http" / "https" ) "://" / "//"
//! credentials  = user [ ":" pass ] "@"
//! user         = 1*( any char except "@" / ":" / whitespace )
//! pass         = 1*( any char except "@" / whitespace )
//! path         = "/" *( any char except "?" / "#" / whitespace )
//! query        = *( any char except "#" / whitespace )
//! fragment     = *( any char )
//! ```
//!
//! The input must be non-empty, is matched as a whole, and must not be a
//! bare run of slashes (`/`, `//`, `///`) or `//` followed by at most one
//! more character besides an optional third slash (`//x`, `///x`). See
//! [`crate::host`] for the host grammar and [`crate::port`] for ports.
//!
//! # Precedence
//!
//! Where more than one reading is possible the first one whose remainder
//! matches wins: a host section before none, a prefix before none,
//! credentials before none, and IPv4 before IPv6 before a domain name.
//! Every sub-matcher is a single forward scan, so a match costs a bounded
//! number of linear passes over the input.

use std::iter;

use crate::constants::{AUTHORITY_PREFIX, SCHEMES, SCHEME_SEPARATOR};
use crate::host::{self, HostKind};
use crate::port::match_port;

/// Substrings captured by a successful match.
///
/// A group that participated but matched nothing (such as the query of
/// `"/a?"`) is `Some("")`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Captures<'a> {
    pub scheme: Option<&'a str>,
    pub user: Option<&'a str>,
    pub pass: Option<&'a str>,
    pub host: Option<&'a str>,
    pub host_kind: Option<HostKind>,
    pub port: Option<&'a str>,
    pub path: Option<&'a str>,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

#[derive(Debug, Clone, Copy)]
struct Credentials<'a> {
    user: &'a str,
    pass: Option<&'a str>,
    end: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct Tail<'a> {
    path: Option<&'a str>,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

/// Matches `input` against the URL grammar.
pub(crate) fn match_url(input: &str) -> Option<Captures<'_>> {
    if input.is_empty() || is_bare_slashes(input) {
        return None;
    }

    match_host_section(input).or_else(|| {
        let tail = match_tail(input, 0)?;
        Some(Captures {
            path: tail.path,
            query: tail.query,
            fragment: tail.fragment,
            ..Captures::default()
        })
    })
}

fn is_bare_slashes(input: &str) -> bool {
    if input.chars().all(|c| c == '/') {
        return true;
    }
    input.strip_prefix(AUTHORITY_PREFIX).is_some_and(|rest| {
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        rest.chars().count() <= 1
    })
}

fn match_host_section(input: &str) -> Option<Captures<'_>> {
    if let Some((scheme, after_prefix)) = match_prefix(input) {
        let attempts = match_credentials(input, after_prefix)
            .map(|creds| (Some(creds), creds.end))
            .into_iter()
            .chain(iter::once((None, after_prefix)));

        for (creds, host_start) in attempts {
            if let Some(captures) = match_authority(input, host_start, scheme, creds) {
                return Some(captures);
            }
        }
    }

    match_authority(input, 0, None, None)
}

/// Matches `http://`, `https://` or `//`, returning the scheme and the
/// offset after the prefix.
fn match_prefix(input: &str) -> Option<(Option<&str>, usize)> {
    for scheme in SCHEMES {
        let Some(candidate) = input.get(..scheme.len()) else {
            continue;
        };
        if candidate.eq_ignore_ascii_case(scheme)
            && input[scheme.len()..].starts_with(SCHEME_SEPARATOR)
        {
            return Some((Some(candidate), scheme.len() + SCHEME_SEPARATOR.len()));
        }
    }

    input
        .starts_with(AUTHORITY_PREFIX)
        .then_some((None, AUTHORITY_PREFIX.len()))
}

/// Matches `user[:pass]@` at `start`.
///
/// Neither part may contain `@`, so the shortest match ends at the first
/// `@`; the user additionally stops at the first `:`.
fn match_credentials(input: &str, start: usize) -> Option<Credentials<'_>> {
    let rest = &input[start..];
    let user_len = rest.find(|c: char| matches!(c, '@' | ':') || c.is_whitespace())?;
    if user_len == 0 {
        return None;
    }
    let user = &rest[..user_len];

    match rest[user_len..].chars().next()? {
        '@' => Some(Credentials {
            user,
            pass: None,
            end: start + user_len + 1,
        }),
        ':' => {
            let after_colon = &rest[user_len + 1..];
            let pass_len = after_colon.find(|c: char| c == '@' || c.is_whitespace())?;
            if pass_len == 0 || !after_colon[pass_len..].starts_with('@') {
                return None;
            }
            Some(Credentials {
                user,
                pass: Some(&after_colon[..pass_len]),
                end: start + user_len + 1 + pass_len + 1,
            })
        }
        _ => None,
    }
}

/// Matches `host [":" port]` at `start` followed by the path/query/fragment
/// tail.
fn match_authority<'a>(
    input: &'a str,
    start: usize,
    scheme: Option<&'a str>,
    creds: Option<Credentials<'a>>,
) -> Option<Captures<'a>> {
    host::candidates(input, start).find_map(|(host_kind, host_end)| {
        let (port, port_end) = match match_port(input, host_end) {
            Some(end) => (Some(&input[host_end + 1..end]), end),
            None => (None, host_end),
        };
        let tail = match_tail(input, port_end)?;

        Some(Captures {
            scheme,
            user: creds.map(|c| c.user),
            pass: creds.and_then(|c| c.pass),
            host: Some(&input[start..host_end]),
            host_kind: Some(host_kind),
            port,
            path: tail.path,
            query: tail.query,
            fragment: tail.fragment,
        })
    })
}

/// Matches `[path] ["?" query] ["#" fragment]` running to the end of input.
fn match_tail(input: &str, start: usize) -> Option<Tail<'_>> {
    let mut tail = Tail::default();
    let mut pos = start;

    if input[pos..].starts_with('/') {
        let body = &input[pos + 1..];
        let len = body
            .find(|c: char| matches!(c, '?' | '#') || c.is_whitespace())
            .unwrap_or(body.len());
        tail.path = Some(&input[pos..=pos + len]);
        pos += 1 + len;
    }

    if input[pos..].starts_with('?') {
        let body = &input[pos + 1..];
        let len = body
            .find(|c: char| c == '#' || c.is_whitespace())
            .unwrap_or(body.len());
        tail.query = Some(&body[..len]);
        pos += 1 + len;
    }

    if let Some(fragment) = input[pos..].strip_prefix('#') {
        tail.fragment = Some(fragment);
        pos = input.len();
    }

    (pos == input.len()).then_some(tail)
}
