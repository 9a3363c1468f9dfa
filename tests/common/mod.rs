use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

/// One-shot HTTP server for exercising the client against canned responses.
///
/// Accepts a single connection, answers it with the configured status line
/// and body, and records the request path for later assertion.
pub struct FixtureServer {
    pub base_url: String,
    path_rx: Receiver<String>,
}

impl FixtureServer {
    pub fn serve(status_line: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (path_tx, path_rx) = mpsc::channel();
        let status_line = status_line.to_string();
        let body = body.to_string();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();

            // Read until the end of the request headers
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let request = String::from_utf8_lossy(&request);
            let path = request
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .unwrap_or_default()
                .to_string();
            let _ = path_tx.send(path);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            path_rx,
        }
    }

    /// Path of the request the server answered.
    pub fn request_path(&self) -> String {
        self.path_rx.recv_timeout(Duration::from_secs(5)).unwrap()
    }
}
