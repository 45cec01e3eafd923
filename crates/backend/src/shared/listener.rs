use std::time::Duration;
use tokio::net::TcpListener;

const RETRY_DELAY: Duration = Duration::from_millis(200);

/// Bind `host:port`, moving to the next port while the current one is in use.
///
/// Gives up after `attempts` ports or on the first error other than
/// `AddrInUse`.
pub async fn bind_with_fallback(
    host: &str,
    port: u16,
    attempts: u16,
) -> anyhow::Result<(TcpListener, u16)> {
    let attempts = attempts.max(1);
    let mut port = port;

    for attempt in 1..=attempts {
        let addr = format!("{}:{}", host, port);
        tracing::info!("Attempting to bind server to http://{}", addr);
        match TcpListener::bind(&addr).await {
            Ok(listener) => {
                let bound = listener.local_addr().map(|a| a.port()).unwrap_or(port);
                tracing::info!("Server successfully bound to {}:{}", host, bound);
                return Ok((listener, bound));
            }
            Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
                tracing::warn!("Port {} in use, trying next port...", port);
                if attempt == attempts {
                    break;
                }
                port = port.checked_add(1).ok_or_else(|| {
                    anyhow::anyhow!("port range exhausted after {}", port)
                })?;
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(e) => {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
                return Err(e.into());
            }
        }
    }

    anyhow::bail!(
        "No available ports found after {} attempts. Please free the port or set PORT env var.",
        attempts
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_moves_to_next_port_when_busy() {
        let busy = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let busy_port = busy.local_addr().unwrap().port();
        if busy_port >= u16::MAX - 3 {
            return;
        }

        let (_listener, port) = bind_with_fallback("127.0.0.1", busy_port, 3).await.unwrap();
        assert_ne!(port, busy_port);
        assert!(port > busy_port && port <= busy_port + 2);
    }

    #[tokio::test]
    async fn test_gives_up_after_attempts() {
        let busy = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let busy_port = busy.local_addr().unwrap().port();

        let result = bind_with_fallback("127.0.0.1", busy_port, 1).await;
        assert!(result.is_err());
    }
}
