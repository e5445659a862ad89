//! Loopback stand-in for the free-slot service.
//!
//! Accepts exactly one connection, records the request body, and answers with
//! a canned status and body.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct StubService {
    pub url: String,
    handle: JoinHandle<String>,
}

impl StubService {
    /// Answer the next request with `status` and `body`.
    pub fn respond(status: u16, body: &str) -> Self {
        Self::respond_after(Duration::ZERO, status, body)
    }

    /// Like [`StubService::respond`], but sit on the request for `delay` first.
    pub fn respond_after(delay: Duration, status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let url = format!("http://{}/api", listener.local_addr().unwrap());
        let body = body.to_string();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let request = read_request_body(&mut stream);
            thread::sleep(delay);
            let response = format!(
                "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
            request
        });

        Self { url, handle }
    }

    /// Wait for the exchange to finish and return the request body received.
    pub fn request_body(self) -> String {
        self.handle.join().expect("stub thread panicked")
    }
}

/// A URL on which nothing is listening.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

fn read_request_body(stream: &mut TcpStream) -> String {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
    let mut content_length = 0usize;

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).expect("read header") == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().expect("numeric content-length");
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).expect("read body");
    String::from_utf8(body).expect("utf-8 body")
}
