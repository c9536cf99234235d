use super::*;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::any;
use serde_json::{Value, json};

use crate::config::HostConfig;
use crate::routes::api_routes;

// =============================================================
// Helpers
// =============================================================

#[test]
fn backend_url_keeps_path_and_query() {
    let uri: Uri = "/api/products/searchBar?q=Vase%20Bl%C3%A5".parse().unwrap();
    assert_eq!(
        backend_url("http://backend:8080", &uri),
        "http://backend:8080/api/products/searchBar?q=Vase%20Bl%C3%A5"
    );
}

#[test]
fn backend_url_tolerates_trailing_slash_on_base() {
    let uri: Uri = "/api/warehouses/lowQty".parse().unwrap();
    assert_eq!(backend_url("http://backend/", &uri), "http://backend/api/warehouses/lowQty");
}

#[test]
fn hop_by_hop_headers_dropped() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("2"));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer null"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.append(header::ACCEPT, HeaderValue::from_static("text/plain"));
    headers.append(header::ACCEPT, HeaderValue::from_static("application/json"));

    let out = forwardable_headers(&headers);
    assert!(out.get(header::HOST).is_none());
    assert!(out.get(header::CONNECTION).is_none());
    assert!(out.get(header::CONTENT_LENGTH).is_none());
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer null");
    assert_eq!(out.get(header::CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(out.get_all(header::ACCEPT).iter().count(), 2);
}

#[test]
fn error_statuses() {
    assert_eq!(ProxyError::Unreachable("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::ResponseBody("reset".into()).status(), StatusCode::BAD_GATEWAY);
    let too_big = ProxyError::RequestBody { status: StatusCode::PAYLOAD_TOO_LARGE, reason: "limit".into() };
    assert_eq!(too_big.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let cut_off = ProxyError::RequestBody { status: StatusCode::BAD_REQUEST, reason: "eof".into() };
    assert_eq!(cut_off.status(), StatusCode::BAD_REQUEST);
}

// =============================================================
// Forwarding against a stub backend
// =============================================================

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> axum::Json<Value> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    axum::Json(json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "authorization": authorization,
        "body": body,
    }))
}

async fn missing_product() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Produkt findes ikke")
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_backend() -> String {
    let router = Router::new()
        .route("/api/products/404", any(missing_product))
        .fallback(echo);
    serve(router).await
}

fn config_for(backend_url: &str) -> HostConfig {
    let backend_url = backend_url.to_owned();
    HostConfig::from_lookup(move |key| match key {
        "BACKEND_URL" => Some(backend_url.clone()),
        "BACKEND_CONNECT_TIMEOUT_SECS" | "BACKEND_REQUEST_TIMEOUT_SECS" => Some("2".into()),
        "MAX_BODY_BYTES" => Some("64".into()),
        _ => None,
    })
    .unwrap()
}

async fn spawn_host(backend_url: &str) -> String {
    let state = AppState::new(config_for(backend_url)).unwrap();
    serve(api_routes(state)).await
}

#[tokio::test]
async fn forwards_method_query_body_and_authorization() {
    let backend = spawn_backend().await;
    let host = spawn_host(&backend).await;

    let res = reqwest::Client::new()
        .post(format!("{host}/api/warehousetransfer?dry=1"))
        .header(header::AUTHORIZATION, "Bearer null")
        .header(header::CONTENT_TYPE, "application/json")
        .body("{}")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let echoed: Value = res.json().await.unwrap();
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["uri"], "/api/warehousetransfer?dry=1");
    assert_eq!(echoed["authorization"], "Bearer null");
    assert_eq!(echoed["body"], "{}");
}

#[tokio::test]
async fn forwards_patch_and_delete() {
    let backend = spawn_backend().await;
    let host = spawn_host(&backend).await;
    let client = reqwest::Client::new();

    let patched: Value = client
        .patch(format!("{host}/api/products/7"))
        .body(r#"{"price":99.5}"#)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(patched["method"], "PATCH");
    assert_eq!(patched["body"], r#"{"price":99.5}"#);

    let deleted: Value = client
        .delete(format!("{host}/api/products/7"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(deleted["method"], "DELETE");
    assert_eq!(deleted["uri"], "/api/products/7");
}

#[tokio::test]
async fn backend_status_and_body_pass_through() {
    let backend = spawn_backend().await;
    let host = spawn_host(&backend).await;

    let res = reqwest::get(format!("{host}/api/products/404")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "Produkt findes ikke");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", closed.local_addr().unwrap());
    drop(closed);
    let host = spawn_host(&dead).await;

    let res = reqwest::get(format!("{host}/api/products")).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    assert!(res.text().await.unwrap().starts_with("backend unreachable"));
}

#[tokio::test]
async fn oversized_body_rejected_before_forwarding() {
    let backend = spawn_backend().await;
    let host = spawn_host(&backend).await;

    let res = reqwest::Client::new()
        .post(format!("{host}/api/products"))
        .body("x".repeat(65))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn truncated_body_is_bad_request_not_too_large() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let backend = spawn_backend().await;
    let host = spawn_host(&backend).await;
    let addr = host.trim_start_matches("http://");

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"POST /api/products HTTP/1.1\r\nHost: localhost\r\nContent-Length: 40\r\n\r\n{\"name\":")
        .await
        .unwrap();
    stream.shutdown().await.unwrap();

    let mut raw = Vec::new();
    tokio::time::timeout(std::time::Duration::from_secs(5), stream.read_to_end(&mut raw))
        .await
        .unwrap()
        .ok();
    let text = String::from_utf8_lossy(&raw);
    let status_line = text.lines().next().unwrap_or_default();
    assert!(!status_line.contains("413"), "cut-off body reported as too large: {status_line}");
    if !status_line.is_empty() {
        assert!(status_line.contains("400"), "unexpected status: {status_line}");
    }
}

#[tokio::test]
async fn healthz_is_ok() {
    let host = spawn_host("http://127.0.0.1:9").await;
    let res = reqwest::get(format!("{host}/healthz")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
