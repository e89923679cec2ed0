//! HTTP client for `GET /analyze/{ticker}` and `GET /health`

use crate::config::ClientConfig;
use crate::error::{AnalyzerError, FetchError, REQUEST_FAILED, Result};
use crate::model::{AnalysisReport, HealthStatus, Ticker};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// Source of analysis reports.
///
/// The page controller and the REPL only talk to this trait, so tests can
/// swap in a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetch the report for one ticker. No retry; one request per call.
    async fn fetch(&self, ticker: &Ticker) -> std::result::Result<AnalysisReport, FetchError>;

    /// Probe the backend health endpoint
    async fn health(&self) -> std::result::Result<HealthStatus, FetchError>;
}

/// reqwest-backed client for the analysis backend
#[derive(Debug, Clone)]
pub struct AnalyzerClient {
    http: Client,
    config: ClientConfig,
}

impl AnalyzerClient {
    /// Create a client from a validated configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AnalyzerError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Create a client configured from `STOCK_ANALYZER_API_URL`
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> std::result::Result<T, FetchError> {
        debug!(%url, "sending request");

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(%url, error = %e, "request failed before a response arrived");
            FetchError::from(e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|source| {
            warn!(%url, status = status.as_u16(), error = %source, "failed to read response body");
            FetchError::Body {
                status: status.as_u16(),
                source,
            }
        })?;

        if !status.is_success() {
            let message = detail_message(&body);
            info!(%url, status = status.as_u16(), %message, "backend returned an error");
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|source| {
            warn!(%url, error = %source, "failed to decode backend response");
            FetchError::Decode {
                status: status.as_u16(),
                source,
            }
        })
    }
}

#[async_trait]
impl ReportSource for AnalyzerClient {
    async fn fetch(&self, ticker: &Ticker) -> std::result::Result<AnalysisReport, FetchError> {
        let url = self.config.analyze_url(ticker.as_str());
        let report: AnalysisReport = self.get_json(&url).await?;
        info!(%ticker, name = %report.name, "report received");
        Ok(report)
    }

    async fn health(&self) -> std::result::Result<HealthStatus, FetchError> {
        self.get_json(&self.config.health_url()).await
    }
}

/// Human-readable message from an error body.
///
/// Only a non-empty string `detail` counts; any other body yields the
/// generic fallback.
fn detail_message(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("detail")
                .and_then(serde_json::Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| REQUEST_FAILED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{Seen, spawn_backend};
    use crate::model::fixtures;
    use std::time::Duration;

    async fn client_for(base_url: &str) -> AnalyzerClient {
        let config = ClientConfig::builder().base_url(base_url).build().unwrap();
        AnalyzerClient::new(config).unwrap()
    }

    fn ticker(s: &str) -> Ticker {
        s.parse().unwrap()
    }

    #[test]
    fn test_detail_message() {
        assert_eq!(detail_message(br#"{"detail":"Ticker not found"}"#), "Ticker not found");
        assert_eq!(detail_message(br#"{"detail":""}"#), "Request failed");
        assert_eq!(detail_message(br#"{"detail":[1,2]}"#), "Request failed");
        assert_eq!(detail_message(br#"{"error":"x"}"#), "Request failed");
        assert_eq!(detail_message(b"<html></html>"), "Request failed");
        assert_eq!(detail_message(b""), "Request failed");
    }

    #[tokio::test]
    async fn test_fetch_success_hits_analyze_path() {
        let seen = Seen::default();
        let base = spawn_backend(seen.clone()).await;
        let client = client_for(&base).await;

        let report = client.fetch(&ticker("AAPL")).await.unwrap();
        assert_eq!(report, fixtures::full_report());
        assert_eq!(*seen.lock().unwrap(), vec!["AAPL".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_not_found_carries_detail() {
        let base = spawn_backend(Seen::default()).await;
        let client = client_for(&base).await;

        let err = client.fetch(&ticker("ZZZZ")).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.message(), "Ticker not found");
    }

    #[tokio::test]
    async fn test_fetch_error_without_string_detail_falls_back() {
        let base = spawn_backend(Seen::default()).await;
        let client = client_for(&base).await;

        let err = client.fetch(&ticker("LIST")).await.unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.message(), "Request failed");

        let err = client.fetch(&ticker("HTML")).await.unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.message(), "Request failed");

        let err = client.fetch(&ticker("OOPS")).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.message(), "Request failed");
    }

    #[tokio::test]
    async fn test_fetch_undecodable_success_body() {
        let base = spawn_backend(Seen::default()).await;
        let client = client_for(&base).await;

        let err = client.fetch(&ticker("JUNK")).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_truncated_body_keeps_status() {
        let base = spawn_backend(Seen::default()).await;
        let client = client_for(&base).await;

        let err = client.fetch(&ticker("CUT")).await.unwrap_err();
        assert!(matches!(err, FetchError::Body { status: 200, .. }), "{err:?}");
        assert_eq!(err.status(), Some(200));
        assert!(
            err.message()
                .starts_with("Could not read response from analysis service")
        );
    }

    #[tokio::test]
    async fn test_fetch_unreachable_backend() {
        // Reserve a port, then free it so nothing is listening there
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{addr}")).await;
        let err = client.fetch(&ticker("AAPL")).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_configured_timeout_aborts_slow_request() {
        let base = spawn_backend(Seen::default()).await;
        let config = ClientConfig::builder()
            .base_url(&base)
            .request_timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        let client = AnalyzerClient::new(config).unwrap();

        let err = client.fetch(&ticker("SLOW")).await.unwrap_err();
        match err {
            FetchError::Transport(e) => assert!(e.is_timeout()),
            other => panic!("expected transport timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_health() {
        let base = spawn_backend(Seen::default()).await;
        let client = client_for(&format!("{base}/")).await;

        let status = client.health().await.unwrap();
        assert_eq!(status.status, "ok");
    }
}
