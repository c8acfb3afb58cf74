use crate::error::ShutdownError;
use reqwest::{Client, StatusCode};
use tracing::debug;

/// Client for the notification-based cooperative shutdown channel
///
/// Posts an empty JSON body to a local shutdown endpoint exposed by the
/// target process. Exactly HTTP 200 counts as delivered; any other status
/// or transport failure is surfaced to the caller. The request inherits the
/// client's default timeout behavior, so callers needing a hard deadline
/// wrap the call themselves.
#[derive(Debug, Clone)]
pub struct ShutdownNotifier {
    endpoint: String,
    client: Client,
}

impl ShutdownNotifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request a cooperative shutdown from the target process.
    pub async fn notify(&self) -> Result<(), ShutdownError> {
        debug!(endpoint = %self.endpoint, "Posting shutdown notification");

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(Vec::new())
            .send()
            .await
            .map_err(|source| ShutdownError::NotifyTransport {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ShutdownError::NotifyRejected {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response and return the endpoint URL.
    async fn serve_once(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            let response = format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            stream.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{addr}/shutdown")
    }

    #[tokio::test]
    async fn notify_succeeds_on_200() {
        let endpoint = serve_once("HTTP/1.1 200 OK").await;
        ShutdownNotifier::new(endpoint).notify().await.unwrap();
    }

    #[tokio::test]
    async fn notify_rejects_non_200_with_status() {
        let endpoint = serve_once("HTTP/1.1 503 Service Unavailable").await;
        let err = ShutdownNotifier::new(endpoint).notify().await.unwrap_err();

        match err {
            ShutdownError::NotifyRejected { status, .. } => assert_eq!(status, 503),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn notify_surfaces_transport_failure() {
        // Bind then drop so the port is known to be unreachable.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = ShutdownNotifier::new(format!("http://{addr}/shutdown"))
            .notify()
            .await
            .unwrap_err();

        assert!(matches!(err, ShutdownError::NotifyTransport { .. }));
    }
}
