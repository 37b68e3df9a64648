//! Filter list to query string.
//!
//! Values are percent-encoded with the RFC 3986 unreserved set left intact
//! (space becomes `%20`, never `+`). Keys are written as given.
//!
//! A value containing a comma is treated as a multi-value field and split into
//! one `key=part` pair per segment. A single free-text value that happens to
//! contain a comma is split the same way; the wire format has no way to tell
//! the two apart.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::types::FilterValue;

/// Everything except `A-Z a-z 0-9 - _ . ~`.
const STRICT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a single value.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, STRICT).to_string()
}

/// Build the query string for `filter`, without a leading `?`.
///
/// An empty filter yields an empty string.
pub fn encode(filter: &[(String, FilterValue)]) -> String {
    let mut pairs = Vec::with_capacity(filter.len());
    for (key, value) in filter {
        let rendered = value.render();
        if rendered.contains(',') {
            // empty segments are kept: "a,,b" yields three pairs
            for part in rendered.split(',') {
                pairs.push(format!("{key}={}", encode_component(part)));
            }
        } else {
            pairs.push(format!("{key}={}", encode_component(&rendered)));
        }
    }
    pairs.join("&")
}
