//! Kani proof harnesses for the URL matcher.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::ParsedUrl;

/// Characters that steer the matcher into each of its branches.
const INPUT_CHARS: &[u8] = b"hpst:/@.[]?#a1-_ ";

/// Maximum input length explored by the harnesses.
const MAX_INPUT_LEN: usize = 8;

/// Generate an input of up to `MAX_INPUT_LEN` interesting characters
fn arbitrary_input() -> String {
    let len: usize = kani::any();
    kani::assume(len <= MAX_INPUT_LEN);

    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            INPUT_CHARS[idx % INPUT_CHARS.len()] as char
        })
        .collect()
}

/// Parsing terminates without panicking on any input.
#[kani::proof]
#[kani::unwind(10)]
fn parse_never_panics() {
    let input = arbitrary_input();
    let _ = ParsedUrl::parse(&input);
}

/// Every accepted URL has at least one component, and rendering it only
/// drops a leading `//` and empty `?`/`#` markers.
#[kani::proof]
#[kani::unwind(10)]
fn rendering_only_drops_delimiters() {
    let input = arbitrary_input();
    if let Ok(url) = ParsedUrl::parse(&input) {
        assert!(url.components().values().any(Option::is_some));

        let rendered = url.to_string();
        assert!(rendered.len() <= input.len());
        if rendered.len() == input.len() {
            assert!(rendered == input);
        }
    }
}
