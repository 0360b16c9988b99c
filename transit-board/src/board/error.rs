//! Board error types.
//!
//! Every variant is meant to be shown to the rider as-is. Upstream
//! failures never appear here: they are logged and become empty results.

/// User-visible reasons a board has nothing to show.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// No API key configured
    #[error("API key not configured")]
    MissingApiKey,

    /// No address configured
    #[error("Address not configured")]
    MissingAddress,

    /// The address didn't geocode, or no stops are near it
    #[error("No stops found")]
    NoStops,
}
