//! Transit agency (MTD) API client.
//!
//! Key characteristics of the API:
//! - Every response carries a `status` block; a 200 HTTP response can still
//!   report a failure there
//! - `getstopsbylatlon` returns stops already ordered by distance
//! - Route colours are hex strings without a leading `#`

mod client;
mod convert;
mod error;
mod types;

pub use client::{MtdClient, MtdConfig};
pub use convert::{convert_departure, convert_stop};
pub use error::MtdError;
pub use types::{ApiStatus, DepartureDto, DeparturesResponse, RouteDto, StopDto, StopsResponse};
