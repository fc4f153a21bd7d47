//! Constants for URL validation.

/// Schemes recognized in front of `://` (matched case-insensitively).
pub const SCHEMES: [&str; 2] = ["http", "https"];

/// Separator between the scheme and the authority.
pub const SCHEME_SEPARATOR: &str = "://";

/// Prefix of a schemeless authority.
pub const AUTHORITY_PREFIX: &str = "//";

/// Smallest port accepted after a host.
pub const MIN_PORT: u16 = 1;

/// Largest port accepted after a host.
pub const MAX_PORT: u16 = 65535;

/// Minimum length of the top-level label of a domain name.
pub const MIN_TLD_LENGTH: usize = 2;

/// Reserved IPv4 blocks rejected as hosts, as leading octets.
///
/// A block with one octet covers a `/8`; a block with two covers a `/16`.
/// `172.16.0.0/12` is checked separately since it does not fall on an octet
/// boundary.
pub const EXCLUDED_IPV4_BLOCKS: [&[&str]; 4] = [&["10"], &["127"], &["169", "254"], &["192", "168"]];
