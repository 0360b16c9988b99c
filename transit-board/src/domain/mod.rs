//! Domain types for the departure board.
//!
//! Stops, departures and the small value types they carry. Types that
//! have validity rules enforce them at construction time.

mod coordinate;
mod departure;
mod direction;
mod route_filter;
mod stop;

pub use coordinate::Coordinate;
pub use departure::{DEFAULT_BADGE_COLOR, DEFAULT_BADGE_TEXT_COLOR, Departure, normalize_color};
pub use direction::{Direction, InvalidDirection, extract_direction};
pub use route_filter::RouteFilter;
pub use stop::{Stop, shorten_name};
