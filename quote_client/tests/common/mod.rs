//! In-process mock of the FavQs API for integration tests.
//!
//! `MockServer` binds an ephemeral port, answers every connection from a fixed route
//! table and hands each parsed request back to the test over a channel.
#![allow(dead_code)]
use crossbeam_channel::{Receiver, Sender, unbounded};
use quote_common::ClientConfig;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

pub const API_KEY: &str = "test-key";
pub const USER_TOKEN: &str = "user-token-123";

/// How the server answers a matched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Send status and body.
    Respond,
    /// Close the connection without answering.
    HangUp,
    /// Wait before answering.
    Stall(Duration),
}

/// Canned response for one method and path.
#[derive(Debug, Clone)]
pub struct Route {
    pub method: &'static str,
    pub path: &'static str,
    pub status: u16,
    pub body: String,
    pub reply: Reply,
}

impl Route {
    pub fn new(method: &'static str, path: &'static str, status: u16, body: impl Into<String>) -> Self {
        Route {
            method,
            path,
            status,
            body: body.into(),
            reply: Reply::Respond,
        }
    }

    pub fn hang_up(method: &'static str, path: &'static str) -> Self {
        Route {
            reply: Reply::HangUp,
            ..Route::new(method, path, 200, "")
        }
    }

    pub fn stall(self, delay: Duration) -> Self {
        Route {
            reply: Reply::Stall(delay),
            ..self
        }
    }

    pub fn session_ok() -> Self {
        Route::new(
            "POST",
            "/api/session",
            200,
            json!({"User-Token": USER_TOKEN, "login": "reader", "email": "reader@example.com"}).to_string(),
        )
    }

    pub fn qotd(body: Value) -> Self {
        Route::new("GET", "/api/qotd", 200, body.to_string())
    }

    pub fn quotes(quotes: Vec<Value>) -> Self {
        Route::new(
            "GET",
            "/api/quotes",
            200,
            json!({"page": 1, "last_page": true, "quotes": quotes}).to_string(),
        )
    }
}

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    pub fn query(&self) -> HashMap<String, String> {
        self.target
            .split_once('?')
            .map(|(_, q)| q)
            .unwrap_or_default()
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

pub struct MockServer {
    addr: SocketAddr,
    requests: Receiver<RecordedRequest>,
}

impl MockServer {
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        let (tx, rx) = unbounded();

        thread::spawn(move || serve(listener, routes, tx));

        MockServer { addr, requests: rx }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Client configuration pointing at this server with a valid key.
    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            api_key: Some(API_KEY.to_string()),
            base_url: self.base_url(),
            proxy_from_env: false,
            ..ClientConfig::default()
        }
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.try_iter().collect()
    }
}

pub fn quote_json(id: u64, author: &str, body: &str) -> Value {
    json!({
        "id": id,
        "favorites_count": 0,
        "dialogue": false,
        "favorite": false,
        "tags": ["science"],
        "url": format!("https://favqs.com/quotes/{id}"),
        "upvotes_count": 0,
        "downvotes_count": 0,
        "author": author,
        "author_permalink": author.to_lowercase().replace(' ', "-"),
        "body": body
    })
}

fn serve(listener: TcpListener, routes: Vec<Route>, tx: Sender<RecordedRequest>) {
    for stream in listener.incoming() {
        let Ok(mut stream) = stream else { continue };
        let Ok(request) = read_request(&mut stream) else { continue };

        let (status, body, reply) = routes
            .iter()
            .find(|r| r.method == request.method && r.path == request.path())
            .map(|r| (r.status, r.body.clone(), r.reply))
            .unwrap_or((404, r#"{"message":"not found"}"#.to_string(), Reply::Respond));

        if tx.send(request).is_err() {
            break;
        }
        match reply {
            Reply::Respond => {
                let _ = write_response(&mut stream, status, &body);
            }
            Reply::HangUp => drop(stream),
            Reply::Stall(delay) => {
                thread::sleep(delay);
                let _ = write_response(&mut stream, status, &body);
            }
        }
    }
}

fn read_request(stream: &mut TcpStream) -> io::Result<RecordedRequest> {
    stream.set_read_timeout(Some(Duration::from_secs(5)))?;
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let head_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        let n = stream.read(&mut chunk)?;
        if n == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let target = request_line.next().unwrap_or_default().to_string();
    let headers: HashMap<String, String> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    let content_length: usize = headers
        .get("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    while buf.len() < head_end + content_length {
        let n = stream.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body_end = buf.len().min(head_end + content_length);
    let body = String::from_utf8_lossy(&buf[head_end..body_end]).to_string();

    Ok(RecordedRequest {
        method,
        target,
        headers,
        body,
    })
}

fn write_response(stream: &mut TcpStream, status: u16, body: &str) -> io::Result<()> {
    let reason = match status {
        200 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };
    write!(
        stream,
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )?;
    stream.flush()
}
