//! Web layer for the departure board.
//!
//! Serves the board as JSON for display clients and as a small HTML page.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::{AppState, BoardDefaults, LiveBoard, LiveHttpClient};
pub use templates::*;
