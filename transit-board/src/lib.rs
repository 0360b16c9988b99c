//! Transit departure board.
//!
//! Answers "which buses leave soonest from the stops near this address?"
//! in at most five rows, suitable for a small fixed-size display.

pub mod board;
pub mod cache;
pub mod domain;
pub mod geocode;
pub mod http;
pub mod mtd;
pub mod web;
