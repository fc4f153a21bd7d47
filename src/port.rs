//! Port sub-matcher.

use crate::constants::{MAX_PORT, MIN_PORT};

/// Matches `":" port` at `start`, returning the digits' range end.
///
/// The port is a decimal in `MIN_PORT..=MAX_PORT` without leading zero. It
/// consumes the whole digit run, since a port can only be followed by `/`,
/// `?`, `#` or the end of input.
pub(crate) fn match_port(input: &str, start: usize) -> Option<usize> {
    let digits = input[start..].strip_prefix(':')?;
    let len = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let port = &digits[..len];

    if port.starts_with('0') {
        return None;
    }
    let value: u16 = port.parse().ok()?;
    (MIN_PORT..=MAX_PORT)
        .contains(&value)
        .then_some(start + 1 + len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_port_bounds() {
        assert_eq!(match_port(":1", 0), Some(2));
        assert_eq!(match_port(":443/", 0), Some(4));
        assert_eq!(match_port(":65535", 0), Some(6));
        assert_eq!(match_port(":60000", 0), Some(6));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(match_port(":0", 0), None);
        assert_eq!(match_port(":65536", 0), None);
        assert_eq!(match_port(":99999", 0), None);
        assert_eq!(match_port(":123456", 0), None);
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(match_port(":", 0), None);
        assert_eq!(match_port(":080", 0), None);
        assert_eq!(match_port("80", 0), None);
        assert_eq!(match_port(":+80", 0), None);
    }

    #[test]
    fn offset_is_absolute() {
        assert_eq!(match_port("a.com:8080/", 5), Some(10));
    }
}
