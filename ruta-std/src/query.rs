//! Query-string parsing.
//!
//! Decoding (percent-escapes and `+` as space) is delegated to
//! `form_urlencoded`. Repeated keys follow standard query-string semantics:
//! the last occurrence wins.

use ruta_core::Location;
use std::collections::HashMap;

/// Parse a raw query string (without its leading `?`) into a decoded map.
///
/// An empty input yields an empty map.
pub fn parse_query(raw: &str) -> HashMap<String, String> {
    form_urlencoded::parse(raw.as_bytes()).into_owned().collect()
}

/// Extract the query map for `location` under the given routing mode.
///
/// In path mode the location's search string is parsed; in hash mode the
/// substring of the hash fragment after its own `?`.
pub fn query_of(location: &Location, use_hash: bool) -> HashMap<String, String> {
    let raw = if use_hash {
        location.hash.split_once('?').map_or("", |(_, query)| query)
    } else {
        location.query.as_str()
    };
    parse_query(raw)
}
