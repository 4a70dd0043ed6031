use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Bytes that pass through URI component encoding untouched.
///
/// Alphanumerics plus the unreserved marks `-_.~` and the path separator `/`.
/// Everything else, including spaces, parentheses and non-ASCII bytes, is
/// written as `%XX`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Percent-encodes `s` as a URI path component (spaces become `%20`).
pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Decodes `%XX` escapes, replacing invalid UTF-8 with U+FFFD.
///
/// Malformed escapes such as `%zz` are left as-is.
pub fn percent_decode(s: &str) -> Cow<'_, str> {
    percent_decode_str(s).decode_utf8_lossy()
}

/// Brings `s` to exactly one layer of percent-encoding, whatever its
/// current state.
pub fn normalize_encoding(s: &str) -> String {
    percent_encode(&percent_decode(s))
}
