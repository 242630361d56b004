//! Multi-file Join SDK - Shared library for join configuration across platforms
//!
//! Provides unified interfaces for:
//! - File schema reconciliation (sheets and columns per uploaded file)
//! - Candidate relationship display (analyzer-discovered, advisory only)
//! - Join configuration state (always-valid-to-submit transition rules)
//! - Submit-readiness validation
//! - Analysis session orchestration (one request/response cycle at a time)

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod models;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use analyzer::{AnalyzeRequest, AnalyzerBackend, AnalyzerError, ApiResponse};
#[cfg(feature = "api-backend")]
pub use analyzer::api::ApiAnalyzerBackend;

pub use catalog::{RelationshipSet, SchemaCatalog};
pub use config::{JoinConfigState, Side};
pub use session::{AnalysisRequest, AnalysisSession, SessionError, SessionEvent, SessionState};
pub use validation::ValidationError;

// Re-export models
pub use models::{
    AnalysisResult, CrossReferenceRequest, FileSchema, JoinCondition, JoinConfig, JoinRequest,
    JoinType, MergeRequest, MergeType, Operator, ReferenceType, Relationship, RequestError,
    SheetSchema,
};
