use std::time::Duration;

use medboard_runtime::{Backend, Error, HttpBackend, execute};
use medboard_types::{Field, FieldPayload, Operation, Parameters, RequestSpec};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Request as seen by the test server
struct Captured {
    request_line: String,
    body: String,
}

/// Serve exactly one HTTP response on a random local port
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut raw = Vec::new();
        let mut chunk = [0u8; 1024];
        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            raw.extend_from_slice(&chunk[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        while raw.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            raw.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        Captured {
            request_line: head.lines().next().unwrap_or_default().to_string(),
            body: String::from_utf8_lossy(&raw[header_end..]).to_string(),
        }
    });

    (base_url, handle)
}

fn backend(base_url: &str) -> HttpBackend {
    HttpBackend::new(base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_list_all_decodes_array() {
    let (base_url, server) = serve_once("200 OK", r#"[{"id":1,"name":"Ada"}]"#).await;

    let value = execute(&backend(&base_url), Operation::ListAll, &Parameters::default())
        .await
        .unwrap();

    assert_eq!(value, json!([{"id": 1, "name": "Ada"}]));
    assert_eq!(server.await.unwrap().request_line, "GET /patients HTTP/1.1");
}

#[tokio::test]
async fn test_search_posts_query_body() {
    let (base_url, server) = serve_once("200 OK", "[]").await;

    execute(
        &backend(&base_url),
        Operation::SemanticSearch,
        &Parameters::with_query("shortness of breath"),
    )
    .await
    .unwrap();

    let captured = server.await.unwrap();
    assert_eq!(captured.request_line, "POST /search HTTP/1.1");
    let body: Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(body, json!({"query": "shortness of breath"}));
}

#[tokio::test]
async fn test_update_puts_payload_to_identifier_path() {
    let (base_url, server) = serve_once("200 OK", r#"{"id":7}"#).await;
    let params = Parameters {
        identifier: "7".to_string(),
        payload: Some(FieldPayload::new().with(Field::Name, "Ada")),
        ..Parameters::default()
    };

    let value = execute(&backend(&base_url), Operation::Update, &params)
        .await
        .unwrap();

    assert_eq!(value, json!({"id": 7}));
    let captured = server.await.unwrap();
    assert_eq!(captured.request_line, "PUT /update_patient/7 HTTP/1.1");
    let body: Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(body["name"], "Ada");
    assert_eq!(body.as_object().unwrap().len(), 5);
}

#[tokio::test]
async fn test_error_status_with_json_body_is_returned_as_value() {
    let (base_url, _server) = serve_once("404 Not Found", r#"{"detail":"Patient not found"}"#).await;

    let value = execute(
        &backend(&base_url),
        Operation::GetById,
        &Parameters::with_identifier("999"),
    )
    .await
    .unwrap();

    assert_eq!(value, json!({"detail": "Patient not found"}));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let (base_url, _server) = serve_once("500 Internal Server Error", "Internal Server Error").await;

    let spec = RequestSpec::build(Operation::ListAll, &Parameters::default()).unwrap();
    let err = backend(&base_url).execute(&spec).await.unwrap_err();

    assert!(matches!(err, Error::Decode { status: 500, .. }), "{err}");
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let spec = RequestSpec::build(Operation::ListAll, &Parameters::default()).unwrap();
    let err = backend(&base_url).execute(&spec).await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "{err}");
}

#[tokio::test]
async fn test_missing_identifier_never_reaches_network() {
    let err = execute(
        &backend("http://127.0.0.1:9"),
        Operation::GetRelatedInfo,
        &Parameters::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::Request(_)));
}
