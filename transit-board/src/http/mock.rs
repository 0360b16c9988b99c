//! Mock HTTP client for testing without network access.
//!
//! Serves canned responses matched by URL substring and records every
//! request it receives, so tests can assert on call counts and on the
//! exact URLs and headers that would have gone upstream.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::error::HttpError;
use super::{HttpClient, HttpRequest, HttpResponse};

/// Mock HTTP client with canned responses.
///
/// Responses are matched in registration order; the first route whose
/// fragment appears in the request URL wins. Unmatched requests get a 404.
#[derive(Clone, Default)]
pub struct MockHttpClient {
    routes: Arc<Vec<(String, HttpResponse)>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for URLs containing `url_fragment`.
    pub fn with_response(mut self, url_fragment: &str, status: u16, body: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.routes).push((url_fragment.to_string(), HttpResponse::new(status, body)));
        self
    }

    /// All requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of requests received so far.
    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// Number of requests whose URL contains `url_fragment`.
    pub async fn count_matching(&self, url_fragment: &str) -> usize {
        self.requests
            .lock()
            .await
            .iter()
            .filter(|r| r.url.contains(url_fragment))
            .count()
    }
}

impl HttpClient for MockHttpClient {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().await.push(request.clone());

        let response = self
            .routes
            .iter()
            .find(|(fragment, _)| request.url.contains(fragment.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| HttpResponse::new(404, ""));

        Ok(response)
    }
}
