use super::*;
use crate::state::test_helpers::test_app_state;

fn test_config() -> Config {
    Config::from_lookup(|key| (key == "DATABASE_URL").then(|| "postgres://test@localhost/test_spaces".to_owned()))
        .expect("config")
}

#[tokio::test]
async fn root_reports_name_and_version() {
    let Json(body) = root().await;
    assert_eq!(body["message"], "Space Rental API running");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn health_reports_ok() {
    let Json(body) = health().await;
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn app_builds_with_and_without_static_dir() {
    let mut config = test_config();
    let _ = app(test_app_state(), &config);

    config.static_dir = Some(std::path::PathBuf::from("client/dist"));
    let _ = app(test_app_state(), &config);
}

// =============================================================
// Malformed requests through the full router
// =============================================================

/// Serve `app()` on a loopback port, send one raw HTTP/1.1 request, and
/// return the status code and the JSON body.
async fn send_raw(request: String) -> (u16, Value) {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let router = app(test_app_state(), &test_config());
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    let mut stream = tokio::net::TcpStream::connect(addr).await.expect("connect");
    stream.write_all(request.as_bytes()).await.expect("write");
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.expect("read");
    let raw = String::from_utf8(raw).expect("utf8 response");

    let (head, body) = raw.split_once("\r\n\r\n").expect("header terminator");
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse().ok())
        .expect("status code");
    (status, serde_json::from_str(body).expect("json body"))
}

fn get_request(path: &str) -> String {
    format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
}

fn assert_malformed(status: u16, body: &Value, scope: &str) {
    assert_eq!(status, 422);
    let detail = body["detail"].as_array().expect("detail list");
    assert_eq!(detail.len(), 1);
    assert_eq!(detail[0]["loc"], json!([scope]));
    assert_eq!(detail[0]["type"], format!("{scope}_invalid"));
}

#[tokio::test]
async fn unparseable_query_is_422_located_in_query() {
    let (status, body) = send_raw(get_request("/api/v1/spaces?page=abc")).await;
    assert_malformed(status, &body, "query");
}

#[tokio::test]
async fn non_numeric_id_is_422_located_in_path() {
    let (status, body) = send_raw(get_request("/api/v1/spaces/abc")).await;
    assert_malformed(status, &body, "path");
}

#[tokio::test]
async fn broken_json_body_is_422_located_in_body() {
    let payload = "{bad}";
    let request = format!(
        "POST /api/v1/spaces HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{payload}",
        payload.len()
    );
    let (status, body) = send_raw(request).await;
    assert_malformed(status, &body, "body");
}
