//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use chrono::Local;
use tower_http::trace::TraceLayer;

use crate::board::BoardError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(board_page))
        .route("/health", get(health))
        .route("/api/departures", get(departures))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Resolve request overrides against the server defaults.
///
/// The address always comes from the server configuration.
fn resolve<'a>(state: &'a AppState, query: &'a BoardQuery) -> (Option<&'a str>, Option<&'a str>) {
    let address = state.defaults.address.as_deref();
    let routes = query.routes.as_deref().or(state.defaults.routes.as_deref());
    (address, routes)
}

/// Departures as JSON.
async fn departures(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<BoardResponse>, AppError> {
    let (address, routes) = resolve(&state, &query);
    let departures = state
        .board
        .run(state.defaults.api_key.as_deref(), address, routes)
        .await?;

    Ok(Json(BoardResponse {
        address: address.unwrap_or_default().trim().to_string(),
        departures: departures.iter().map(DepartureResult::from).collect(),
        generated_at: Local::now().to_rfc3339(),
    }))
}

/// Departure board page.
async fn board_page(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> impl IntoResponse {
    let (address, routes) = resolve(&state, &query);
    let result = state
        .board
        .run(state.defaults.api_key.as_deref(), address, routes)
        .await;

    let (rows, message) = match result {
        Ok(departures) => (departures.iter().map(DepartureRow::from).collect(), None),
        Err(e) => (Vec::new(), Some(e.to_string())),
    };

    let template = BoardTemplate {
        address: address.unwrap_or_default().trim().to_string(),
        rows,
        message,
        updated: Local::now().format("%H:%M").to_string(),
    };

    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<BoardError> for AppError {
    fn from(e: BoardError) -> Self {
        match e {
            BoardError::MissingApiKey | BoardError::MissingAddress => AppError::BadRequest {
                message: e.to_string(),
            },
            BoardError::NoStops => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        tracing::info!(%status, %message, "board request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_errors_map_to_statuses() {
        let response = AppError::from(BoardError::MissingApiKey).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::from(BoardError::MissingAddress).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::from(BoardError::NoStops).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn query_overrides_routes_but_not_address() {
        use std::sync::Arc;

        use crate::board::{BoardConfig, DepartureBoard};
        use crate::cache::MemoryCache;
        use crate::geocode::GeocoderConfig;
        use crate::http::{CachedHttpClient, HttpConfig, ReqwestHttpClient};
        use crate::mtd::MtdConfig;
        use crate::web::BoardDefaults;

        let cache = Arc::new(MemoryCache::default());
        let http = CachedHttpClient::new(ReqwestHttpClient::new(HttpConfig::default()).unwrap(), cache.clone());
        let board = DepartureBoard::new(http, cache, GeocoderConfig::default(), MtdConfig::default(), BoardConfig::default());
        let state = AppState::new(
            board,
            BoardDefaults {
                api_key: Some("key".into()),
                address: Some("601 E John St".into()),
                routes: Some("22".into()),
            },
        );

        let uri: axum::http::Uri = "/api/departures?address=Lincoln%20Square&routes=1".parse().unwrap();
        let Query(query) = Query::<BoardQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(resolve(&state, &query), (Some("601 E John St"), Some("1")));

        let empty = BoardQuery::default();
        assert_eq!(resolve(&state, &empty), (Some("601 E John St"), Some("22")));
    }
}
