//! Forwarding of `/api/*` requests to the clinic backend
//!
//! The browser client only uses same-origin relative paths; this router
//! relays them to `BACKEND_URL`:
//! - ANY /api/{*path} - forwarded with method, query, body and the headers
//!   the backend needs (auth, cookies, content type)

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{HeaderMap, HeaderName, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};
use serde::Serialize;
use std::sync::Arc;

use crate::core::config::Config;

const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] = [
    header::ACCEPT,
    header::AUTHORIZATION,
    header::CONTENT_TYPE,
    header::COOKIE,
];

const FORWARDED_RESPONSE_HEADERS: [HeaderName; 3] =
    [header::CACHE_CONTROL, header::CONTENT_TYPE, header::SET_COOKIE];

/// Forwarder state shared by all requests
#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    backend_url: Option<Arc<str>>,
}

impl ProxyState {
    pub fn new(config: &Config) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .timeout(config.backend_timeout())
            .build()
            .map_err(|e| ProxyError::Client(e.to_string()))?;

        Ok(Self {
            client,
            backend_url: config.backend_url.as_deref().map(Arc::from),
        })
    }
}

/// Error body returned for requests the forwarder could not complete
#[derive(Debug, Serialize)]
pub struct ProxyErrorBody {
    pub error: String,
    pub code: String,
}

/// Forwarding error types
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Backend is not configured")]
    NotConfigured,

    #[error("Backend did not answer in time")]
    Timeout,

    #[error("Backend request failed: {0}")]
    Upstream(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProxyError::Timeout
        } else {
            ProxyError::Upstream(err.to_string())
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ProxyError::NotConfigured => (StatusCode::SERVICE_UNAVAILABLE, "BACKEND_NOT_CONFIGURED"),
            ProxyError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "BACKEND_TIMEOUT"),
            ProxyError::Upstream(_) => (StatusCode::BAD_GATEWAY, "BACKEND_UNREACHABLE"),
            ProxyError::Client(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ProxyErrorBody {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Create the forwarding router
pub fn proxy_router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/{*path}", any(forward))
        .with_state(state)
}

/// Backend URL for an incoming `/api/{path}?{query}` request
pub fn target_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{}/api/{}?{}", base, path, query),
        None => format!("{}/api/{}", base, path),
    }
}

fn pick_headers(source: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut picked = HeaderMap::new();
    for name in names {
        for value in source.get_all(name) {
            picked.append(name.clone(), value.clone());
        }
    }
    picked
}

async fn forward(
    State(state): State<ProxyState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let base = state.backend_url.as_deref().ok_or(ProxyError::NotConfigured)?;
    let url = target_url(base, &path, query.as_deref());

    tracing::debug!("Forwarding {} {}", method, url);

    let upstream = state
        .client
        .request(method, &url)
        .headers(pick_headers(&headers, &FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!("Backend request to {} failed: {}", url, e);
            ProxyError::from(e)
        })?;

    let status = upstream.status();
    let response_headers = pick_headers(upstream.headers(), &FORWARDED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await?;

    Ok((status, response_headers, bytes).into_response())
}
