//! Address preparation for geocoding and cache keys.

/// Substrings that mark an address as already local (matched lowercase).
pub const LOCATION_HINTS: &[&str] = &["champaign", "urbana", "savoy", "illinois", ", il"];

/// Appended to addresses that carry no location hint.
pub const LOCATION_SUFFIX: &str = ", Champaign, IL";

/// Returns true if `address` mentions none of the location hints.
pub fn needs_location_hint(address: &str) -> bool {
    let lower = address.to_lowercase();
    !LOCATION_HINTS.iter().any(|hint| lower.contains(hint))
}

/// Append the fixed location suffix unless the address is already local.
pub fn with_location_hint(address: &str) -> String {
    if needs_location_hint(address) {
        format!("{address}{LOCATION_SUFFIX}")
    } else {
        address.to_string()
    }
}

/// Percent-encode an address for the geocoder query string.
///
/// Only space, comma, ampersand and hash are escaped. Every other
/// character, including `/`, `?`, `+` and `%`, passes through unchanged,
/// so this is not general URI escaping.
pub fn encode_query(address: &str) -> String {
    let mut encoded = String::with_capacity(address.len());
    for c in address.chars() {
        match c {
            ' ' => encoded.push_str("%20"),
            ',' => encoded.push_str("%2C"),
            '&' => encoded.push_str("%26"),
            '#' => encoded.push_str("%23"),
            other => encoded.push(other),
        }
    }
    encoded
}

/// Cache key for an address: spaces and commas removed, truncated to
/// `max_chars` characters, prefixed with `geo_`.
pub fn address_cache_key(address: &str, max_chars: usize) -> String {
    let compact: String = address
        .chars()
        .filter(|&c| c != ' ' && c != ',')
        .take(max_chars)
        .collect();
    format!("geo_{compact}")
}
