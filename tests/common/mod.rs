//! Shared helpers: a scripted upstream double and a gateway bound to an
//! ephemeral port.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use product_gateway::routes::gateway_router;
use product_gateway::state::AppState;
use product_gateway::upstream::{HttpProductSource, HttpUpstreamInitializationInfo};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub struct MockUpstream {
    pub addr: SocketAddr,
    /// Request lines seen by the double, e.g. "GET /foo?bar=1 HTTP/1.1".
    pub requests: Arc<Mutex<Vec<String>>>,
}

/// Start a mock upstream that records request lines and answers every request
/// with the given status and body after an optional delay.
pub async fn start_mock_upstream(status: u16, body: &'static str, delay: Duration) -> MockUpstream {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let seen = seen.clone();
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 4096];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        if let Some(line) = String::from_utf8_lossy(&buf[..n]).lines().next() {
                            seen.lock().await.push(line.to_string());
                        }

                        if delay > Duration::ZERO {
                            tokio::time::sleep(delay).await;
                        }

                        let response = format!(
                            "HTTP/1.1 {} OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockUpstream {
        addr: addr,
        requests: requests,
    }
}

/// Serve the gateway on an ephemeral port, aimed at the given upstream.
pub async fn spawn_gateway(upstream_base_url: String, timeout: Duration) -> SocketAddr {
    let info = HttpUpstreamInitializationInfo {
        base_url: upstream_base_url,
        timeout: timeout,
    };
    let product_source = Arc::new(HttpProductSource::new(&info).unwrap());
    let state = Arc::new(AppState {
        product_source: product_source,
        company: String::from("AMZ"),
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, gateway_router(state)).await.unwrap();
    });

    addr
}
