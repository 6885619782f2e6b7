//! HTTP transport for the analysis service
//!
//! Each operation issues exactly one request and normalizes the outcome
//! into either a parsed payload or an [`ApiError`] naming the endpoint.
//! No retries, no cancellation, no timeout beyond reqwest's defaults.

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::models::{
    AnalyzePasswordRequest, AnalyzeTextRequest, PasswordAnalysis, ServiceInfo, TextAnalysis,
};
use super::Endpoint;

/// Normalized failure of a single transport call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint answered with a non-success status. The error body,
    /// if any, is not parsed.
    #[error("error calling {}: service responded with {status}", .endpoint.path())]
    Status {
        endpoint: Endpoint,
        status: StatusCode,
    },

    /// The request could not be sent or completed (DNS, connection
    /// refused, aborted mid-flight).
    #[error("error calling {}: {source}", .endpoint.path())]
    Transport {
        endpoint: Endpoint,
        source: reqwest::Error,
    },

    /// The endpoint answered 2xx but the body was not the expected JSON.
    #[error("error calling {}: invalid response body: {source}", .endpoint.path())]
    Body {
        endpoint: Endpoint,
        source: reqwest::Error,
    },
}

impl ApiError {
    /// The endpoint this failure belongs to.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Status { endpoint, .. }
            | Self::Transport { endpoint, .. }
            | Self::Body { endpoint, .. } => *endpoint,
        }
    }
}

/// The four operations of the analysis service, abstracted so the UI can
/// be exercised against a stub in tests.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn health(&self) -> Result<Value, ApiError>;
    async fn info(&self) -> Result<ServiceInfo, ApiError>;
    async fn analyze_text(&self, text: &str) -> Result<TextAnalysis, ApiError>;
    async fn analyze_password(&self, password: &str) -> Result<PasswordAnalysis, ApiError>;
}

/// Stateless HTTP client bound to one base URL.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base address. A trailing slash on the
    /// base URL is tolerated; endpoint paths always start with one.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The configured base address, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        debug!("GET {}", self.url(endpoint));
        let response = self
            .http
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        Self::decode(endpoint, response).await
    }

    async fn post_json<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        debug!("POST {}", self.url(endpoint));
        let response = self
            .http
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        Self::decode(endpoint, response).await
    }

    async fn decode<T: DeserializeOwned>(
        endpoint: Endpoint,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }
        response
            .json()
            .await
            .map_err(|source| ApiError::Body { endpoint, source })
    }
}

#[async_trait]
impl AnalysisService for ApiClient {
    /// `GET /health` — the payload shape is owned by the service, so it is
    /// kept as raw JSON.
    async fn health(&self) -> Result<Value, ApiError> {
        self.get_json(Endpoint::Health).await
    }

    /// `GET /info`
    async fn info(&self) -> Result<ServiceInfo, ApiError> {
        self.get_json(Endpoint::Info).await
    }

    /// `POST /analyze` with `{"text": ...}`
    async fn analyze_text(&self, text: &str) -> Result<TextAnalysis, ApiError> {
        self.post_json(Endpoint::AnalyzeText, &AnalyzeTextRequest { text })
            .await
    }

    /// `POST /analyze/password` with `{"password": ...}`
    async fn analyze_password(&self, password: &str) -> Result<PasswordAnalysis, ApiError> {
        self.post_json(Endpoint::AnalyzePassword, &AnalyzePasswordRequest { password })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_endpoint() {
        let err = ApiError::Status {
            endpoint: Endpoint::Health,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = err.to_string();
        assert!(message.contains("/health"), "message was: {message}");
        assert!(message.contains("500"), "message was: {message}");
    }

    #[test]
    fn test_error_endpoint_accessor() {
        let err = ApiError::Status {
            endpoint: Endpoint::AnalyzePassword,
            status: StatusCode::BAD_GATEWAY,
        };
        assert_eq!(err.endpoint(), Endpoint::AnalyzePassword);
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url(Endpoint::AnalyzeText),
            "http://localhost:8000/analyze"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Nothing listens on the discard port; the request fails before
        // any response arrives.
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client.health().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { .. }));
        assert!(err.to_string().contains("/health"));
    }
}
