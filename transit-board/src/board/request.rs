//! Validated board requests.

use crate::domain::RouteFilter;

use super::error::BoardError;

/// Everything one request cycle needs, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRequest {
    pub api_key: String,
    pub address: String,
    pub routes: RouteFilter,
}

impl BoardRequest {
    /// Validate raw configuration values.
    ///
    /// Blank values count as missing. The API key is checked first.
    pub fn new(
        api_key: Option<&str>,
        address: Option<&str>,
        routes: Option<&str>,
    ) -> Result<Self, BoardError> {
        let api_key = non_blank(api_key).ok_or(BoardError::MissingApiKey)?;
        let address = non_blank(address).ok_or(BoardError::MissingAddress)?;
        let routes = routes.map(RouteFilter::parse).unwrap_or_default();

        Ok(Self {
            api_key: api_key.to_string(),
            address: address.to_string(),
            routes,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
