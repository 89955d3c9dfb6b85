//! Minimal HTTP/1.1 server standing in for rentry.co in integration tests.
//!
//! Answers every request with one fixed status and body, and records the raw
//! request text so header emission can be asserted.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// Requests received so far, as raw request text (request line + headers).
pub type Requests = Arc<Mutex<Vec<String>>>;

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/") and the request log. The server runs
/// until the process exits.
pub fn start(status: u16, body: &str) -> (String, Requests) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests: Requests = Arc::new(Mutex::new(Vec::new()));
    let body = body.to_string();
    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = body.clone();
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, status, &body, &log));
        }
    });
    (format!("http://127.0.0.1:{}/", port), requests)
}

fn handle(mut stream: TcpStream, status: u16, body: &str, log: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    if let Ok(request) = std::str::from_utf8(&buf[..n]) {
        log.lock().unwrap().push(request.to_string());
    }
    let reason = match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        _ => "Error",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
