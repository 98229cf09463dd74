//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// What a programmable backend should do with one request.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    /// Answer with `status` after `delay`.
    Status { status: u16, delay: Duration },
    /// Read the request and never answer.
    Hang,
}

impl Reply {
    pub fn now(status: u16) -> Self {
        Reply::Status {
            status,
            delay: Duration::ZERO,
        }
    }
}

/// Start a backend whose reply is chosen per request by `f`.
/// Returns the bound address (port chosen by the OS).
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Reply> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        match f().await {
                            Reply::Hang => {
                                tokio::time::sleep(Duration::from_secs(3600)).await;
                            }
                            Reply::Status { status, delay } => {
                                tokio::time::sleep(delay).await;
                                let response = format!(
                                    "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                                    status,
                                    reason(status)
                                );
                                let _ = socket.write_all(response.as_bytes()).await;
                                let _ = socket.shutdown().await;
                            }
                        }
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        301 => "Moved Permanently",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// An address nothing is listening on.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Write `content` to a temp file with the given suffix.
pub fn config_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}
