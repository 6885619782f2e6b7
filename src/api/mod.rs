//! Client for the remote text analysis service
//!
//! This module owns everything that talks to the service: the endpoint
//! catalogue, the wire data models, and the reqwest-based client that
//! issues the actual HTTP requests.

pub mod client;
pub mod models;

pub use client::{AnalysisService, ApiClient, ApiError};
pub use models::{PasswordAnalysis, ServiceInfo, TextAnalysis};

use std::fmt;

/// One fixed operation exposed by the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Health,
    Info,
    AnalyzeText,
    AnalyzePassword,
}

impl Endpoint {
    /// Path of this endpoint relative to the configured base URL.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Health => "/health",
            Self::Info => "/info",
            Self::AnalyzeText => "/analyze",
            Self::AnalyzePassword => "/analyze/password",
        }
    }

    /// Human-readable name for status lines and logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Health => "health check",
            Self::Info => "service info",
            Self::AnalyzeText => "text analysis",
            Self::AnalyzePassword => "password analysis",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Health.path(), "/health");
        assert_eq!(Endpoint::Info.path(), "/info");
        assert_eq!(Endpoint::AnalyzeText.path(), "/analyze");
        assert_eq!(Endpoint::AnalyzePassword.path(), "/analyze/password");
    }

    #[test]
    fn test_endpoint_display_matches_path() {
        assert_eq!(Endpoint::AnalyzePassword.to_string(), "/analyze/password");
    }
}
