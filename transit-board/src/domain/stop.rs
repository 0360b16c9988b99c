//! Transit stops and stop-name shortening.

use serde::{Deserialize, Serialize};

/// Substring replacements applied to stop names, in order.
///
/// Later rules see the output of earlier ones.
const NAME_REPLACEMENTS: &[(&str, &str)] = &[
    ("Transit Plaza", "Plaza"),
    ("Krannert Center", "Krannert"),
    ("Illinois Terminal", "IL Terminal"),
    (" and ", " & "),
    ("Street", "St"),
    ("Avenue", "Ave"),
    ("Drive", "Dr"),
    ("Road", "Rd"),
    ("Boulevard", "Blvd"),
    ("(NE Corner)", ""),
    ("(NW Corner)", ""),
    ("(SE Corner)", ""),
    ("(SW Corner)", ""),
];

/// A transit stop near the requested address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Agency stop identifier, e.g. `"IT:1"`.
    pub stop_id: String,

    /// Display name, already shortened.
    pub name: String,
}

impl Stop {
    /// Create a stop, shortening the upstream name for display.
    pub fn new(stop_id: impl Into<String>, upstream_name: &str) -> Self {
        Self {
            stop_id: stop_id.into(),
            name: shorten_name(upstream_name),
        }
    }
}

/// Shorten a stop name to fit the display.
///
/// Applies the fixed replacement list in order, then collapses runs of
/// spaces left behind by removed fragments.
pub fn shorten_name(name: &str) -> String {
    let replaced = NAME_REPLACEMENTS
        .iter()
        .fold(name.to_string(), |acc, (from, to)| acc.replace(from, to));

    replaced
        .split(' ')
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
