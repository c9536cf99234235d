//! `/api/*` forwarding to the warehouse backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Every `/api` call is replayed
//! against `BACKEND_URL` with the same method, path, query, body and
//! end-to-end headers (notably `Authorization`), and the backend's status,
//! headers and body are handed back unchanged.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The incoming body could not be buffered. `status` is 413 when it hit
    /// the size limit and 400 for anything else (e.g. the client aborted).
    #[error("request body rejected: {reason}")]
    RequestBody { status: StatusCode, reason: String },
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("backend response unreadable: {0}")]
    ResponseBody(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::RequestBody { status, .. } => *status,
            Self::Unreachable(_) | Self::ResponseBody(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<BytesRejection> for ProxyError {
    fn from(rejection: BytesRejection) -> Self {
        Self::RequestBody { status: rejection.status(), reason: rejection.body_text() }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api forward failed");
        (self.status(), self.to_string()).into_response()
    }
}

/// Headers scoped to a single connection; never forwarded in either direction.
/// `content-length` is recomputed from the buffered body.
#[must_use]
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
            | "host"
            | "content-length"
    )
}

/// Copy of `headers` without hop-by-hop entries. Repeated headers keep every value.
#[must_use]
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !is_hop_by_hop(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Backend URL for an incoming request URI: same path and query on the backend origin.
#[must_use]
pub fn backend_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Forward one `/api` request and relay the backend's answer.
///
/// # Errors
///
/// Returns [`ProxyError`] when the request body cannot be buffered (over the
/// `DefaultBodyLimit` set in `api_routes`, or cut off), the backend cannot be
/// reached, or its response body cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ProxyError> {
    let url = backend_url(&state.config.backend_url, &uri);
    let body = body?;

    tracing::debug!(%method, %url, bytes = body.len(), "forwarding api request");

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwardable_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| ProxyError::Unreachable(e.to_string()))?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| ProxyError::ResponseBody(e.to_string()))?;

    tracing::debug!(%method, %url, %status, "backend responded");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
