//! Minimal HTTP/1.1 server serving one canned response, for integration
//! tests of the points lookup. Every request gets the same status and body.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// Starts a server answering every request with `status` and `body`.
/// Returns the base URL (e.g. "http://127.0.0.1:12345"). The server runs
/// until the process exits.
pub fn start(status: u16, body: &str) -> String {
    start_with_log(status, body).0
}

/// Like `start`, but also returns the log of request lines received, so
/// tests can assert on the path and query the client produced.
pub fn start_with_log(status: u16, body: &str) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.to_string());
    let log = Arc::new(Mutex::new(Vec::new()));
    let server_log = Arc::clone(&log);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let log = Arc::clone(&server_log);
            thread::spawn(move || handle(stream, status, &body, &log));
        }
    });
    (format!("http://127.0.0.1:{port}"), log)
}

fn handle(mut stream: TcpStream, status: u16, body: &str, log: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    if let Ok(request) = std::str::from_utf8(&buf[..n]) {
        if let Some(line) = request.lines().next() {
            log.lock().unwrap().push(line.to_string());
        }
    }
    let reason = match status {
        200 => "OK",
        403 => "Forbidden",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
}
