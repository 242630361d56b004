//! HTTP analyzer backend
//!
//! Calls the external schema-analysis service over HTTP. Used for online
//! mode (default).
//!
//! ## Security
//!
//! File ids are validated as UUIDs before a request is issued, matching
//! the format the service assigns on upload. Malformed ids never leave the
//! client.

use super::{AnalyzeRequest, AnalyzerBackend, AnalyzerError, ApiResponse};
use crate::models::AnalysisResult;
use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

/// Validate a file id for safe use in an analysis request.
///
/// The service assigns UUIDs to uploaded files and rejects anything else
/// with a 400; checking here turns that round trip into a local error.
fn validate_file_id(file_id: &str) -> Result<(), AnalyzerError> {
    if file_id.is_empty() {
        return Err(AnalyzerError::InvalidFileId(
            "file id cannot be empty".to_string(),
        ));
    }

    Uuid::parse_str(file_id)
        .map(|_| ())
        .map_err(|_| AnalyzerError::InvalidFileId(format!("not a UUID: {}", file_id)))
}

/// Analyzer backend that communicates with the HTTP analysis service
pub struct ApiAnalyzerBackend {
    base_url: String,
    auth_token: Option<String>,
    client: reqwest::Client,
}

impl ApiAnalyzerBackend {
    /// Create a new API analyzer backend
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API server (e.g., "https://api.example.com/api")
    /// * `auth_token` - Optional bearer token for authentication
    pub fn new(base_url: impl Into<String>, auth_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token,
            client: reqwest::Client::new(),
        }
    }

    /// Build a request with authentication headers
    fn build_request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, &url);

        if let Some(ref token) = self.auth_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        request
    }
}

#[async_trait(?Send)]
impl AnalyzerBackend for ApiAnalyzerBackend {
    async fn analyze(&self, file_ids: &[String]) -> Result<AnalysisResult, AnalyzerError> {
        for file_id in file_ids {
            validate_file_id(file_id)?;
        }

        debug!(files = file_ids.len(), "requesting schema analysis");

        let body = AnalyzeRequest::new(file_ids.to_vec());
        let response = self
            .build_request(reqwest::Method::POST, "/multifile/analyze")
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalyzerError::NetworkError(format!("failed to call analyzer: {}", e)))?;

        let envelope: ApiResponse<AnalysisResult> = response.json().await.map_err(|e| {
            AnalyzerError::SerializationError(format!("failed to parse analyzer response: {}", e))
        })?;

        envelope.into_result()
    }
}
