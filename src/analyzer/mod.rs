//! Schema-analysis service abstraction
//!
//! Defines the wire types of the external analyzer, the error taxonomy,
//! and the `AnalyzerBackend` trait the session drives. The HTTP
//! implementation lives in [`api`] behind the `api-backend` feature.

use crate::models::AnalysisResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Error type for analyzer operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalyzerError {
    #[error("invalid file id: {0}")]
    InvalidFileId(String),
    #[error("network error: {0}")]
    NetworkError(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
    #[error("{message}")]
    ServiceError { code: i64, message: String },
}

impl AnalyzerError {
    /// Human-readable text for the session's failed state: the envelope
    /// message when the service supplied one, else the error's own text,
    /// else a generic fallback
    pub fn user_message(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            "analysis failed".to_string()
        } else {
            text
        }
    }
}

/// Body of the analysis request
///
/// `analysis_type` is fixed to schema-structure analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeRequest {
    pub file_ids: Vec<String>,
    pub analysis_type: String,
}

impl AnalyzeRequest {
    pub const SCHEMA_ANALYSIS: &'static str = "schema";

    pub fn new(file_ids: Vec<String>) -> Self {
        Self {
            file_ids,
            analysis_type: Self::SCHEMA_ANALYSIS.to_string(),
        }
    }
}

/// Response envelope the analyzer wraps every payload in
///
/// `code == 200` with non-null `data` signals success; any other code (or
/// a transport failure) is a failure with `msg` as the user-facing text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, AnalyzerError> {
        match (self.code, self.data) {
            (200, Some(data)) => Ok(data),
            (code, _) => {
                let message = if self.msg.trim().is_empty() {
                    format!("analysis service returned code {}", code)
                } else {
                    self.msg
                };
                Err(AnalyzerError::ServiceError { code, message })
            }
        }
    }
}

/// Trait for analyzer backends
///
/// One call covers one analysis cycle: submit the full file-id set, get
/// back the atomically-produced result. The session layers its
/// precondition and staleness rules on top.
#[async_trait(?Send)]
pub trait AnalyzerBackend {
    async fn analyze(&self, file_ids: &[String]) -> Result<AnalysisResult, AnalyzerError>;
}

#[cfg(feature = "api-backend")]
pub mod api;
