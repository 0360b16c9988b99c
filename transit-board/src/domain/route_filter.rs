//! Route filtering for departure lists.

use std::collections::HashSet;

use super::Departure;

/// A set of route codes a board is restricted to.
///
/// Codes are stored uppercase. An empty filter allows every route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteFilter {
    routes: HashSet<String>,
}

impl RouteFilter {
    /// A filter that allows every route.
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list such as `"22, 1,teal"`.
    ///
    /// Entries are trimmed and uppercased; blank entries are dropped.
    pub fn parse(routes: &str) -> Self {
        Self::from_codes(routes.split(','))
    }

    /// Build a filter from individual route codes.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let routes = codes
            .into_iter()
            .map(|c| c.as_ref().trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .collect();
        Self { routes }
    }

    /// Returns true if no routes are listed (nothing is filtered).
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns true if departures on `route_code` should be shown.
    pub fn allows(&self, route_code: &str) -> bool {
        self.routes.is_empty() || self.routes.contains(&route_code.to_uppercase())
    }

    /// Keep only departures on allowed routes, preserving order.
    pub fn apply(&self, departures: Vec<Departure>) -> Vec<Departure> {
        if self.is_empty() {
            return departures;
        }
        departures
            .into_iter()
            .filter(|d| self.allows(&d.route_code))
            .collect()
    }
}
