//! Tests for the IPFS client against a local stub node

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use publish_core::ContentStore;
use publish_ipfs::{Error, IpfsClient};

/// Request line and body seen by the stub node.
struct Captured {
    request_line: String,
    body: String,
}

/// Serve exactly one HTTP request with `status` and `body`.
fn stub_node(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut content_length = 0usize;
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            if header == "\r\n" || header.is_empty() {
                break;
            }
            let lower = header.to_ascii_lowercase();
            if let Some(value) = lower.strip_prefix("content-length:") {
                content_length = value.trim().parse().unwrap();
            }
        }
        let mut request_body = vec![0u8; content_length];
        reader.read_exact(&mut request_body).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();

        Captured {
            request_line: request_line.trim_end().to_string(),
            body: String::from_utf8_lossy(&request_body).into_owned(),
        }
    });

    (url, handle)
}

#[test]
fn publish_posts_multipart_and_returns_hash() {
    let (url, node) = stub_node("200 OK", r#"{"Name":"file","Hash":"QmDoc","Size":"20"}"#);
    let client = IpfsClient::new(url).unwrap();

    let address = client.publish("# Agent documentation").unwrap();
    let captured = node.join().unwrap();

    assert_eq!(address, "QmDoc");
    assert!(captured.request_line.starts_with("POST /api/v0/add?pin=true "));
    assert!(captured.body.contains("# Agent documentation"));
    assert!(captured.body.contains("name=\"file\""));
}

#[test]
fn error_status_surfaces_as_store_error() {
    let (url, node) = stub_node("500 Internal Server Error", r#"{"Message":"pin failed"}"#);
    let client = IpfsClient::new(url).unwrap();

    let err = client.publish("payload").unwrap_err();
    node.join().unwrap();

    let inner = err.inner().downcast_ref::<Error>().unwrap();
    assert!(matches!(inner, Error::Status { status: 500, .. }));
    assert!(err.to_string().contains("pin failed"));
}

#[test]
fn cat_returns_raw_content() {
    let (url, node) = stub_node("200 OK", r#"{"manifest":{},"signature":"0x00"}"#);
    let client = IpfsClient::new(url).unwrap();

    let content = client.cat("QmEnvelope").unwrap();
    let captured = node.join().unwrap();

    assert_eq!(content, r#"{"manifest":{},"signature":"0x00"}"#);
    assert!(captured.request_line.starts_with("POST /api/v0/cat?arg=QmEnvelope "));
}

#[test]
fn unreachable_node_is_request_error() {
    // Bind then drop to get a port nothing listens on
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = IpfsClient::new(format!("http://127.0.0.1:{port}")).unwrap();

    let err = client.add("payload").unwrap_err();
    assert!(matches!(err, Error::Request { .. }));
}
