//! Application state for the web layer.

use std::sync::Arc;

use crate::board::DepartureBoard;
use crate::cache::MemoryCache;
use crate::http::{CachedHttpClient, ReqwestHttpClient};

/// Live transport: reqwest with a shared in-memory response cache.
pub type LiveHttpClient = CachedHttpClient<ReqwestHttpClient, MemoryCache>;

/// Board wired to live upstream APIs.
pub type LiveBoard = DepartureBoard<LiveHttpClient, MemoryCache>;

/// Settings used when a request doesn't override them.
#[derive(Debug, Clone, Default)]
pub struct BoardDefaults {
    /// Transit API key. Never taken from the request.
    pub api_key: Option<String>,

    /// Address the board shows. Never taken from the request.
    pub address: Option<String>,

    /// Comma-separated route filter.
    pub routes: Option<String>,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Departure board pipeline
    pub board: Arc<LiveBoard>,

    /// Server-side board settings
    pub defaults: Arc<BoardDefaults>,
}

impl AppState {
    pub fn new(board: LiveBoard, defaults: BoardDefaults) -> Self {
        Self {
            board: Arc::new(board),
            defaults: Arc::new(defaults),
        }
    }
}
