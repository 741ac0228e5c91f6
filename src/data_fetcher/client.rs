//! One-shot HTTP fetch against the configured score feed endpoint.

use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::constants;
use crate::error::AppError;

/// Transport-level failure of a single fetch, carrying the diagnostic code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Non-200-class HTTP response
    #[error("status {0}")]
    Status(u16),
    /// Request exceeded the configured timeout
    #[error("timeout")]
    Timeout,
    /// Network-layer failure before a response arrived
    #[error("connection: {0}")]
    Connection(String),
}

/// Outcome of one fetch attempt.
///
/// `Connectivity` is never produced by the client itself: the caller checks
/// the connected flag first and synthesizes it without touching the network
/// (see `run_pipeline`).
#[derive(Debug, Clone)]
pub enum FetchResult {
    Success(Bytes),
    Connectivity,
    Transport(TransportError),
}

/// HTTP client bound to the configured endpoint. One GET per call, bounded by
/// the configured timeout; no retries, the next scheduler tick is the retry.
#[derive(Debug, Clone)]
pub struct ScoreboardClient {
    http: Client,
    endpoint: String,
}

impl ScoreboardClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_seconds))
            .pool_max_idle_per_host(constants::HTTP_POOL_MAX_IDLE_PER_HOST)
            .build()?;

        Ok(ScoreboardClient {
            http,
            endpoint: config.endpoint_url.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues a single GET to the endpoint. 200-class responses yield the raw
    /// body bytes; everything else is a `Transport` failure with its code.
    pub async fn fetch(&self) -> FetchResult {
        info!("Fetching scores from {}", self.endpoint);

        let response = match self.http.get(&self.endpoint).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Request failed for {}: {}", self.endpoint, e);
                return FetchResult::Transport(classify_request_error(&e));
            }
        };

        let status = response.status();
        debug!("Response status: {status}");

        if !status.is_success() {
            error!(
                "HTTP {} from {} ({})",
                status.as_u16(),
                self.endpoint,
                status.canonical_reason().unwrap_or("Unknown error")
            );
            return FetchResult::Transport(TransportError::Status(status.as_u16()));
        }

        match response.bytes().await {
            Ok(body) => {
                debug!("Received {} byte payload", body.len());
                FetchResult::Success(body)
            }
            Err(e) => {
                error!("Failed reading response body from {}: {}", self.endpoint, e);
                FetchResult::Transport(classify_request_error(&e))
            }
        }
    }
}

fn classify_request_error(e: &reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Connection(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(endpoint_url: String) -> Config {
        Config {
            endpoint_url,
            refresh_interval_seconds: 300,
            fetch_timeout_seconds: 1,
            line_budget: 6,
            char_width: 20,
            log_file_path: None,
        }
    }

    #[tokio::test]
    async fn test_fetch_success_returns_body_bytes() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/games"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"games":[]}"#))
            .mount(&mock_server)
            .await;

        let client =
            ScoreboardClient::new(&test_config(format!("{}/games", mock_server.uri()))).unwrap();

        match client.fetch().await {
            FetchResult::Success(body) => assert_eq!(&body[..], br#"{"games":[]}"#),
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_non_200_is_transport_with_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = ScoreboardClient::new(&test_config(mock_server.uri())).unwrap();

        match client.fetch().await {
            FetchResult::Transport(TransportError::Status(code)) => assert_eq!(code, 500),
            other => panic!("expected Transport(Status(500)), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_404_carries_code() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = ScoreboardClient::new(&test_config(mock_server.uri())).unwrap();

        match client.fetch().await {
            FetchResult::Transport(TransportError::Status(code)) => assert_eq!(code, 404),
            other => panic!("expected Transport(Status(404)), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_transport_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&mock_server)
            .await;

        // Client timeout is 1s, response takes 5s
        let client = ScoreboardClient::new(&test_config(mock_server.uri())).unwrap();

        match client.fetch().await {
            FetchResult::Transport(TransportError::Timeout) => {}
            other => panic!("expected Transport(Timeout), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_connection_error() {
        // Nothing listens here
        let client =
            ScoreboardClient::new(&test_config("http://127.0.0.1:1/games".to_string())).unwrap();

        match client.fetch().await {
            FetchResult::Transport(TransportError::Connection(_)) => {}
            FetchResult::Transport(TransportError::Timeout) => {}
            other => panic!("expected a transport failure, got {other:?}"),
        }
    }
}
