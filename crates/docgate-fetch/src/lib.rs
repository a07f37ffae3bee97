//! # docgate-fetch
//!
//! The network fetch capability behind the docgate gateway: a plain HTTP
//! GET that returns the body as text and maps non-success statuses and
//! transport failures to [`FetchError`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use docgate_core::{FetchError, Fetcher};

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("docgate/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Failure to construct the HTTP client.
#[derive(Debug, Error)]
#[error("failed to build HTTP client: {0}")]
pub struct ClientBuildError(#[from] reqwest::Error);

/// [`Fetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] if the TLS backend or client cannot be initialized.
    pub fn new(config: &FetchConfig) -> Result<Self, ClientBuildError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    async fn get(&self, locator: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(locator)
            .send()
            .await
            .map_err(|e| FetchError::transport(locator, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(locator, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::transport(locator, e))
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        debug!(%locator, "GET");
        match self.get(locator).await {
            Ok(body) => {
                debug!(%locator, bytes = body.len(), "fetched");
                Ok(body)
            }
            Err(e) => {
                warn!(%locator, error = %e.failure, "fetch failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    use super::*;
    use docgate_core::FetchFailure;

    /// Serve one canned response per connection; returns the raw request heads.
    fn serve(responses: Vec<(&'static str, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let mut requests = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().unwrap();
                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    head.extend_from_slice(&buf[..n]);
                }
                requests.push(String::from_utf8_lossy(&head).into_owned());
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).unwrap();
            }
            requests
        });
        (base, handle)
    }

    #[test]
    fn default_config_identifies_docgate() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("docgate/"));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: FetchConfig = toml::from_str("timeout_secs = 5").unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.user_agent, FetchConfig::default().user_agent);
    }

    #[test]
    fn builds_from_default_config() {
        assert!(HttpFetcher::new(&FetchConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn malformed_locator_is_a_transport_failure() {
        let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert_eq!(err.locator, "not a url");
        assert!(matches!(err.failure, FetchFailure::Transport(_)));
    }

    #[tokio::test]
    async fn non_success_status_and_body_are_mapped() {
        let (base, server) = serve(vec![
            ("404 Not Found", "missing"),
            ("200 OK", "alpha\nbeta\n"),
        ]);
        let fetcher = HttpFetcher::new(&FetchConfig {
            timeout_secs: 5,
            user_agent: "docgate-test/1.0".to_string(),
        })
        .unwrap();

        let missing = format!("{base}/missing");
        let err = fetcher.fetch(&missing).await.unwrap_err();
        assert_eq!(err.locator, missing);
        assert_eq!(err.failure, FetchFailure::Status(404));

        let body = fetcher.fetch(&format!("{base}/llms.txt")).await.unwrap();
        assert_eq!(body, "alpha\nbeta\n");

        let requests = server.join().unwrap();
        assert!(requests[0].starts_with("GET /missing "));
        assert!(requests[1].starts_with("GET /llms.txt "));
        assert!(requests[1].to_lowercase().contains("user-agent: docgate-test/1.0"));
    }
}
