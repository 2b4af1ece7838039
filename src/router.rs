use axum::{routing::get, Router};
use tokio::net::TcpListener;

use crate::error::AppError;

pub fn router() -> Router {
    Router::new().route("/", get(health))
}

/// Liveness probe for uptime monitors.
async fn health() -> &'static str {
    "Bot is alive"
}

/// Serves the health endpoint until the process exits.
///
/// # Returns
/// - `Err(AppError::IoErr)` - The port could not be bound or the server failed
pub async fn serve_health(port: u16) -> Result<(), AppError> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("Health endpoint listening on port {}", port);

    axum::serve(listener, router()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use super::*;

    #[tokio::test]
    async fn health_reports_alive() {
        assert_eq!(health().await, "Bot is alive");
    }

    #[tokio::test]
    async fn serves_health_over_http() -> Result<(), AppError> {
        let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move { axum::serve(listener, router()).await });

        let mut stream = tokio::net::TcpStream::connect(addr).await?;
        stream
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await?;
        let mut response = String::new();
        stream.read_to_string(&mut response).await?;

        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.ends_with("Bot is alive"));

        Ok(())
    }
}
