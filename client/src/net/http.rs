//! Authorized request wrapper around the browser HTTP client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `authorized_fetch` returns a network error since these
//! endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Request preparation is pure: `prepare_request` turns a path, caller
//! options, and the session credential into an `OutboundRequest`. Only
//! `authorized_fetch` touches the network. The wrapper never retries,
//! refreshes, or queues; a non-2xx response is handed back unchanged.
//!
//! HEADER PRECEDENCE
//! =================
//! The caller's header wins for every name except `Authorization` and
//! `Content-Type`, which are always the session's bearer value and JSON.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Errors surfaced by the wrapper and the typed API on top of it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status. `body` is its text.
    #[error("{body}")]
    Status { status: u16, body: String },
    /// A 2xx body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The request could not be assembled (e.g. unserializable payload).
    #[error("request could not be built: {0}")]
    Request(String),
}

/// HTTP verbs used against the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Fetch `credentials` option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Credentials {
    Omit,
    SameOrigin,
    Include,
}

/// Fetch `mode` option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    SameOrigin,
    NoCors,
    Cors,
}

/// Caller-supplied request configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub credentials: Option<Credentials>,
    pub mode: Option<Mode>,
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn delete() -> Self {
        Self { method: Method::Delete, ..Self::default() }
    }

    /// Request with `method` and `payload` serialized as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Request` if `payload` cannot be serialized.
    pub fn json<T: Serialize>(method: Method, payload: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(Self { method, body: Some(body), ..Self::default() })
    }
}

/// Fully prepared request, ready to hand to the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct OutboundRequest {
    pub url: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub credentials: Option<Credentials>,
    pub mode: Option<Mode>,
}

impl OutboundRequest {
    /// Value of header `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// `Authorization` value for `token`; a missing credential becomes `null`.
#[must_use]
pub fn bearer_value(token: Option<&str>) -> String {
    format!("Bearer {}", token.unwrap_or("null"))
}

/// Merge the session headers into the caller's headers.
#[must_use]
pub fn merge_headers(caller: &[(String, String)], token: Option<&str>) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = Vec::with_capacity(caller.len() + 2);
    for (name, value) in caller {
        if name.eq_ignore_ascii_case(AUTHORIZATION) || name.eq_ignore_ascii_case(CONTENT_TYPE) {
            continue;
        }
        if let Some(slot) = merged.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
            slot.1.clone_from(value);
        } else {
            merged.push((name.clone(), value.clone()));
        }
    }
    merged.push((AUTHORIZATION.to_owned(), bearer_value(token)));
    merged.push((CONTENT_TYPE.to_owned(), JSON_CONTENT_TYPE.to_owned()));
    merged
}

/// Decorate `options` with the session credential for a call to `url`.
#[must_use]
pub fn prepare_request(url: &str, options: RequestOptions, token: Option<&str>) -> OutboundRequest {
    let headers = merge_headers(&options.headers, token);
    OutboundRequest {
        url: url.to_owned(),
        method: options.method,
        headers,
        body: options.body,
        credentials: options.credentials,
        mode: options.mode,
    }
}

/// A response with its body already read as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into `ApiError::Status`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` carrying the status and body text.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.ok() {
            Ok(self)
        } else {
            Err(ApiError::Status { status: self.status, body: self.body })
        }
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Issue one authorized request and pass the response through unchanged.
///
/// # Errors
///
/// Returns `ApiError::Network` when no response arrives, and
/// `ApiError::Request` when the browser rejects the request options.
pub async fn authorized_fetch(url: &str, options: RequestOptions, token: Option<&str>) -> Result<ApiResponse, ApiError> {
    let request = prepare_request(url, options, token);
    #[cfg(feature = "hydrate")]
    {
        send(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn send(request: OutboundRequest) -> Result<ApiResponse, ApiError> {
    use gloo_net::http::{Method as GlooMethod, RequestBuilder};

    let method = match request.method {
        Method::Get => GlooMethod::GET,
        Method::Post => GlooMethod::POST,
        Method::Patch => GlooMethod::PATCH,
        Method::Delete => GlooMethod::DELETE,
    };

    let mut builder = RequestBuilder::new(&request.url).method(method);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    if let Some(credentials) = request.credentials {
        builder = builder.credentials(match credentials {
            Credentials::Omit => web_sys::RequestCredentials::Omit,
            Credentials::SameOrigin => web_sys::RequestCredentials::SameOrigin,
            Credentials::Include => web_sys::RequestCredentials::Include,
        });
    }
    if let Some(mode) = request.mode {
        builder = builder.mode(match mode {
            Mode::SameOrigin => web_sys::RequestMode::SameOrigin,
            Mode::NoCors => web_sys::RequestMode::NoCors,
            Mode::Cors => web_sys::RequestMode::Cors,
        });
    }

    let built = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Request(e.to_string()))?;

    let resp = built.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(ApiResponse { status, body })
}
