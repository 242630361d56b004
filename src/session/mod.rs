//! Analysis session orchestration
//!
//! [`AnalysisSession`] runs one analysis request/response cycle at a time:
//! `Idle → Analyzing → {Ready, Failed}`. Everything is single-threaded and
//! event-driven; the only suspension point is awaiting the analyzer
//! response, during which join-configuration edits remain callable.
//!
//! Staleness policy: every request is tagged with the file-id set it was
//! issued for. A response is applied only while the session is still
//! `Analyzing` for that exact set; a superseded response is discarded
//! rather than cancelled in transport, so out-of-order completion can
//! never overwrite state produced by a later request.

use crate::analyzer::{AnalyzerBackend, AnalyzerError};
use crate::catalog::{RelationshipSet, SchemaCatalog};
use crate::config::JoinConfigState;
use crate::models::AnalysisResult;
use tracing::{info, warn};

/// Error blocking an analysis from starting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("at least 2 files are required for analysis, got {0}")]
    TooFewFiles(usize),
}

/// Where the session is in its request/response cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    Analyzing,
    Ready(AnalysisResult),
    Failed(String),
}

/// What applying a response did to the session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Result accepted; the join configuration was re-seeded from it
    Ready,
    /// Failure accepted, with the user-facing message now held in state
    Failed(String),
    /// Response was stale or duplicate; state untouched
    Discarded,
}

/// Tag identifying the analysis cycle a response belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    file_ids: Vec<String>,
}

impl AnalysisRequest {
    pub fn file_ids(&self) -> &[String] {
        &self.file_ids
    }
}

/// One user-facing analysis session: input file set, analysis state, and
/// the join configuration being built
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    file_ids: Vec<String>,
    state: SessionState,
    config: JoinConfigState,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn file_ids(&self) -> &[String] {
        &self.file_ids
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, SessionState::Ready(_))
    }

    /// Replace the input file-id set
    ///
    /// A changed set invalidates the current analysis wholesale: any held
    /// result is dropped and any in-flight response becomes stale by tag
    /// mismatch. An unchanged set is a no-op.
    pub fn set_file_ids(&mut self, file_ids: Vec<String>) {
        if file_ids == self.file_ids {
            return;
        }
        self.file_ids = file_ids;
        self.state = SessionState::Idle;
    }

    /// Start an analysis cycle for the current file-id set
    ///
    /// Fewer than two files is a precondition violation: no request is
    /// issued and the state does not change. Otherwise the session enters
    /// `Analyzing` and the returned request carries the tag that a
    /// matching [`complete_analysis`](Self::complete_analysis) must
    /// present.
    pub fn begin_analysis(&mut self) -> Result<AnalysisRequest, SessionError> {
        if self.file_ids.len() < 2 {
            return Err(SessionError::TooFewFiles(self.file_ids.len()));
        }
        self.state = SessionState::Analyzing;
        Ok(AnalysisRequest {
            file_ids: self.file_ids.clone(),
        })
    }

    /// Apply the outcome of an analysis request
    ///
    /// The outcome is accepted only while the session is still `Analyzing`
    /// for the request's file-id set; anything else is discarded without
    /// touching state. Acceptance of a success seeds the join
    /// configuration from the fresh result, exactly once: a duplicate
    /// response finds the session `Ready` and is discarded, so user edits
    /// are never overwritten by re-seeding.
    pub fn complete_analysis(
        &mut self,
        request: &AnalysisRequest,
        outcome: Result<AnalysisResult, AnalyzerError>,
    ) -> SessionEvent {
        if self.state != SessionState::Analyzing || request.file_ids != self.file_ids {
            warn!(
                request_files = request.file_ids.len(),
                "discarding stale analysis response"
            );
            return SessionEvent::Discarded;
        }

        match outcome {
            Ok(result) => {
                info!(
                    schemas = result.file_schemas.len(),
                    relationships = result.relationships.len(),
                    "analysis ready"
                );
                self.config.seed_from(&result);
                self.state = SessionState::Ready(result);
                SessionEvent::Ready
            }
            Err(error) => {
                let message = error.user_message();
                warn!(%message, "analysis failed");
                self.state = SessionState::Failed(message.clone());
                SessionEvent::Failed(message)
            }
        }
    }

    /// Run one full analysis cycle against a backend
    pub async fn analyze(
        &mut self,
        backend: &dyn AnalyzerBackend,
    ) -> Result<SessionEvent, SessionError> {
        let request = self.begin_analysis()?;
        let outcome = backend.analyze(request.file_ids()).await;
        Ok(self.complete_analysis(&request, outcome))
    }

    /// The held analysis result, if the session is ready
    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            SessionState::Ready(result) => Some(result),
            _ => None,
        }
    }

    /// Schema lookups over the current result; empty unless ready
    pub fn catalog(&self) -> SchemaCatalog<'_> {
        self.result().map(SchemaCatalog::new).unwrap_or_else(SchemaCatalog::empty)
    }

    /// Discovered relationships of the current result; empty unless ready
    pub fn relationships(&self) -> RelationshipSet<'_> {
        self.result()
            .map(RelationshipSet::new)
            .unwrap_or_else(RelationshipSet::empty)
    }

    pub fn config(&self) -> &JoinConfigState {
        &self.config
    }

    /// Join-configuration mutations stay callable in every session state;
    /// before a result arrives they simply operate on empty data
    pub fn config_mut(&mut self) -> &mut JoinConfigState {
        &mut self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileSchema;

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn result_for(left: &str, right: &str) -> AnalysisResult {
        AnalysisResult {
            file_schemas: vec![
                FileSchema::new(left, format!("{left}.xlsx")).with_sheet("Sheet1", vec!["id"]),
                FileSchema::new(right, format!("{right}.xlsx")).with_sheet("Sheet2", vec!["id"]),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_precondition_blocks_request() {
        let mut session = AnalysisSession::new();
        session.set_file_ids(ids(&["a"]));
        assert_eq!(session.begin_analysis(), Err(SessionError::TooFewFiles(1)));
        assert_eq!(*session.state(), SessionState::Idle);
    }

    #[test]
    fn test_success_seeds_config() {
        let mut session = AnalysisSession::new();
        session.set_file_ids(ids(&["a", "b"]));
        let request = session.begin_analysis().unwrap();
        let event = session.complete_analysis(&request, Ok(result_for("a", "b")));
        assert_eq!(event, SessionEvent::Ready);
        assert!(session.is_ready());
        assert_eq!(session.config().config().left_file_id, "a");
        assert_eq!(session.catalog().sheets_of("b"), vec!["Sheet2"]);
    }

    #[test]
    fn test_stale_response_discarded_after_file_set_change() {
        let mut session = AnalysisSession::new();
        session.set_file_ids(ids(&["a", "b"]));
        let stale = session.begin_analysis().unwrap();

        session.set_file_ids(ids(&["a", "c"]));
        let fresh = session.begin_analysis().unwrap();
        assert_eq!(session.complete_analysis(&fresh, Ok(result_for("a", "c"))), SessionEvent::Ready);

        // the response for [a, b] arrives late and must not win
        let event = session.complete_analysis(&stale, Ok(result_for("a", "b")));
        assert_eq!(event, SessionEvent::Discarded);
        assert_eq!(session.config().config().right_file_id, "c");
        assert_eq!(session.result().unwrap().file_schemas[1].file_id, "c");
    }

    #[test]
    fn test_duplicate_response_does_not_reseed() {
        let mut session = AnalysisSession::new();
        session.set_file_ids(ids(&["a", "b"]));
        let request = session.begin_analysis().unwrap();
        session.complete_analysis(&request, Ok(result_for("a", "b")));

        // user edit after seeding
        session.config_mut().set_left_table("Custom");

        let event = session.complete_analysis(&request, Ok(result_for("a", "b")));
        assert_eq!(event, SessionEvent::Discarded);
        assert_eq!(session.config().config().left_table, "Custom");
    }

    #[test]
    fn test_failure_holds_message_and_allows_retry() {
        let mut session = AnalysisSession::new();
        session.set_file_ids(ids(&["a", "b"]));
        let request = session.begin_analysis().unwrap();
        let event = session.complete_analysis(
            &request,
            Err(AnalyzerError::NetworkError("connection refused".to_string())),
        );
        assert_eq!(
            event,
            SessionEvent::Failed("network error: connection refused".to_string())
        );
        assert!(matches!(session.state(), SessionState::Failed(_)));

        // failed state permits re-triggering
        let retry = session.begin_analysis().unwrap();
        assert_eq!(*session.state(), SessionState::Analyzing);
        assert_eq!(retry.file_ids(), session.file_ids());
    }

    #[test]
    fn test_unchanged_file_set_keeps_result() {
        let mut session = AnalysisSession::new();
        session.set_file_ids(ids(&["a", "b"]));
        let request = session.begin_analysis().unwrap();
        session.complete_analysis(&request, Ok(result_for("a", "b")));

        session.set_file_ids(ids(&["a", "b"]));
        assert!(session.is_ready());

        session.set_file_ids(ids(&["a", "b", "c"]));
        assert_eq!(*session.state(), SessionState::Idle);
        assert!(session.catalog().is_empty());
    }
}
