//! Departure board pipeline.
//!
//! Turns an address into the handful of departures worth showing:
//! - [`StopLocator`] geocodes the address and finds the nearest stops
//! - [`DepartureFetcher`] fetches each stop's predictions
//! - [`DepartureAggregate`] keeps one departure per route+direction, closest
//!   stop first, and ranks them by arrival
//!
//! Everything is cached through [`Cache`](crate::cache::Cache) with TTLs
//! from [`BoardConfig`].

mod aggregate;
mod config;
mod error;
mod fetcher;
mod locator;
mod request;
mod service;

#[cfg(test)]
mod fixtures;

pub use aggregate::{DepartureAggregate, aggregate};
pub use config::BoardConfig;
pub use error::BoardError;
pub use fetcher::{DepartureFetcher, departures_cache_key};
pub use locator::StopLocator;
pub use request::BoardRequest;
pub use service::DepartureBoard;
