//! Test-only HTTP plumbing.
//!
//! A minimal one-shot HTTP/1.1 server backed by a raw tokio listener, so
//! client tests can assert on the exact bytes that went over the wire
//! without pulling in a mock-server dependency.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

/// Serve a single canned response on an OS-assigned port.
///
/// Returns the base URL to aim a client at, plus a receiver that yields
/// the raw request text once the server has read it. Header names appear
/// lowercased in the raw text, as the client writes them.
pub async fn one_shot_server(status: u16, body: &str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener
        .local_addr()
        .expect("Failed to read listener address");
    let base_url = format!("http://{}", addr);
    let (tx, rx) = oneshot::channel();
    let body = body.to_string();

    tokio::spawn(async move {
        let (mut socket, _) = listener
            .accept()
            .await
            .expect("Failed to accept test connection");
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason(status),
            body.len(),
            body
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("Failed to write test response");
        let _ = tx.send(request);
    });

    (base_url, rx)
}

/// Read one HTTP/1.1 request, honoring Content-Length for the body.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket
            .read(&mut chunk)
            .await
            .expect("Failed to read test request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(header_end) = find_header_end(&buf) {
            let headers = String::from_utf8_lossy(&buf[..header_end]);
            let content_length = headers
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

/// Byte offset of the blank line separating headers from body.
fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|window| window == b"\r\n\r\n")
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_one_shot_server_round_trip() {
        let (base_url, request) = one_shot_server(200, r#"{"ok":true}"#).await;

        let response = reqwest::get(format!("{}/ping", base_url))
            .await
            .expect("Failed to reach test server");
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(
            response.text().await.expect("Failed to read body"),
            r#"{"ok":true}"#
        );

        let raw = request.await.expect("Request not captured");
        assert!(raw.starts_with("GET /ping HTTP/1.1"));
    }
}
