//! Recognized license identifiers
//!
//! Accepts common SPDX identifiers, the Debian names for them (`Expat` for
//! MIT) and the short names Python trove classifiers use. Compound SPDX
//! expressions such as `MIT OR Apache-2.0` are recognized when every
//! operand is.

const KNOWN_LICENSES: &[&str] = &[
    "0bsd",
    "afl-3.0",
    "agpl-3.0",
    "agpl-3.0-only",
    "agpl-3.0-or-later",
    "apache",
    "apache-2.0",
    "artistic-2.0",
    "bsd",
    "bsd-2-clause",
    "bsd-3-clause",
    "bsl-1.0",
    "cc0-1.0",
    "epl-2.0",
    "expat",
    "gpl",
    "gpl-2.0",
    "gpl-2.0-only",
    "gpl-2.0-or-later",
    "gpl-3.0",
    "gpl-3.0-only",
    "gpl-3.0-or-later",
    "isc",
    "lgpl",
    "lgpl-2.1",
    "lgpl-2.1-only",
    "lgpl-2.1-or-later",
    "lgpl-3.0",
    "lgpl-3.0-only",
    "lgpl-3.0-or-later",
    "mit",
    "mpl-2.0",
    "psf",
    "psf-2.0",
    "python-2.0",
    "public domain",
    "unlicense",
    "wtfpl",
    "zlib",
];

const OPERATORS: &[&str] = &["or", "and", "with"];

/// Whether a license string names only recognized licenses
pub fn is_recognized(license: &str) -> bool {
    let normalized = license.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return false;
    }
    if KNOWN_LICENSES.contains(&normalized.as_str()) {
        return true;
    }

    let cleaned = normalized.replace(['(', ')'], " ");
    let mut operands = cleaned
        .split_whitespace()
        .filter(|token| !OPERATORS.contains(token))
        .peekable();

    if operands.peek().is_none() {
        return false;
    }
    operands.all(|token| {
        let token = token.trim_end_matches('+');
        KNOWN_LICENSES.contains(&token) || token.ends_with("-exception")
    })
}
