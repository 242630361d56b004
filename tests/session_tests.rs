//! Analysis session tests

use async_trait::async_trait;
use multifile_join_sdk::{
    AnalysisResult, AnalyzerBackend, AnalyzerError, AnalysisSession, FileSchema, SessionError,
    SessionEvent, SessionState, Side,
};

fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn result_for(left: &str, right: &str) -> AnalysisResult {
    AnalysisResult {
        file_schemas: vec![
            FileSchema::new(left, format!("{left}.xlsx")).with_sheet("Sheet1", vec!["id", "name"]),
            FileSchema::new(right, format!("{right}.xlsx"))
                .with_sheet("Sheet2", vec!["id", "amount"]),
        ],
        relationships: vec![],
        suggestions: vec![],
    }
}

/// Backend returning a canned outcome, recording what it was asked for
struct CannedBackend {
    outcome: Result<AnalysisResult, AnalyzerError>,
    calls: std::cell::RefCell<Vec<Vec<String>>>,
}

impl CannedBackend {
    fn new(outcome: Result<AnalysisResult, AnalyzerError>) -> Self {
        Self {
            outcome,
            calls: std::cell::RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl AnalyzerBackend for CannedBackend {
    async fn analyze(&self, file_ids: &[String]) -> Result<AnalysisResult, AnalyzerError> {
        self.calls.borrow_mut().push(file_ids.to_vec());
        self.outcome.clone()
    }
}

mod precondition_tests {
    use super::*;

    #[tokio::test]
    async fn test_fewer_than_two_files_never_calls_backend() {
        let backend = CannedBackend::new(Ok(result_for("a", "b")));

        for set in [&[][..], &["only-one"][..]] {
            let mut session = AnalysisSession::new();
            session.set_file_ids(ids(set));
            let error = session.analyze(&backend).await.unwrap_err();
            assert_eq!(error, SessionError::TooFewFiles(set.len()));
            assert_eq!(*session.state(), SessionState::Idle);
        }
        assert!(backend.calls.borrow().is_empty());
    }
}

mod lifecycle_tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_cycle_reaches_ready_and_seeds() {
        let mut session = AnalysisSession::new();
        session.set_file_ids(ids(&["a", "b"]));
        let backend = CannedBackend::new(Ok(result_for("a", "b")));

        let event = session.analyze(&backend).await.unwrap();
        assert_eq!(event, SessionEvent::Ready);
        assert!(session.is_ready());
        assert_eq!(backend.calls.borrow().as_slice(), &[ids(&["a", "b"])]);

        // seeded configuration
        assert_eq!(session.config().config().left_file_id, "a");
        assert_eq!(session.config().config().right_table, "Sheet2");

        // derived views answer from the held result
        assert_eq!(session.catalog().columns_of("a", "Sheet1"), ["id", "name"]);
        assert!(session.relationships().is_empty());
    }

    #[tokio::test]
    async fn test_failed_cycle_holds_message() {
        let mut session = AnalysisSession::new();
        session.set_file_ids(ids(&["a", "b"]));
        let backend = CannedBackend::new(Err(AnalyzerError::ServiceError {
            code: 500,
            message: "analysis crashed".to_string(),
        }));

        let event = session.analyze(&backend).await.unwrap();
        assert_eq!(event, SessionEvent::Failed("analysis crashed".to_string()));
        assert_eq!(
            *session.state(),
            SessionState::Failed("analysis crashed".to_string())
        );
        assert!(session.catalog().is_empty());
    }

    #[tokio::test]
    async fn test_failed_then_retry_succeeds() {
        let mut session = AnalysisSession::new();
        session.set_file_ids(ids(&["a", "b"]));

        let failing =
            CannedBackend::new(Err(AnalyzerError::NetworkError("timeout".to_string())));
        session.analyze(&failing).await.unwrap();
        assert!(matches!(session.state(), SessionState::Failed(_)));

        let working = CannedBackend::new(Ok(result_for("a", "b")));
        let event = session.analyze(&working).await.unwrap();
        assert_eq!(event, SessionEvent::Ready);
    }

    #[tokio::test]
    async fn test_config_editable_while_not_ready() {
        let mut session = AnalysisSession::new();
        session.set_file_ids(ids(&["a", "b"]));
        // edits before any result operate on empty data without blocking
        session.config_mut().set_join_type(multifile_join_sdk::JoinType::Left);
        session.config_mut().set_condition_column(0, Side::Left, "id");
        assert_eq!(session.config().config().conditions[0].left_column, "id");
        assert!(session.catalog().sheets_of("a").is_empty());
    }
}

mod staleness_tests {
    use super::*;

    #[test]
    fn test_stale_response_cannot_overwrite_newer_ready_state() {
        let mut session = AnalysisSession::new();

        session.set_file_ids(ids(&["a", "b"]));
        let stale_request = session.begin_analysis().unwrap();

        // input changes while the first request is in flight
        session.set_file_ids(ids(&["a", "c"]));
        let fresh_request = session.begin_analysis().unwrap();
        assert_eq!(
            session.complete_analysis(&fresh_request, Ok(result_for("a", "c"))),
            SessionEvent::Ready
        );

        // out-of-order completion of the superseded request
        assert_eq!(
            session.complete_analysis(&stale_request, Ok(result_for("a", "b"))),
            SessionEvent::Discarded
        );
        assert_eq!(session.config().config().right_file_id, "c");
        assert_eq!(session.catalog().sheets_of("c"), vec!["Sheet2"]);
    }

    #[test]
    fn test_stale_failure_does_not_taint_ready_session() {
        let mut session = AnalysisSession::new();
        session.set_file_ids(ids(&["a", "b"]));
        let stale_request = session.begin_analysis().unwrap();

        session.set_file_ids(ids(&["a", "c"]));
        let fresh_request = session.begin_analysis().unwrap();
        session.complete_analysis(&fresh_request, Ok(result_for("a", "c")));

        let event = session.complete_analysis(
            &stale_request,
            Err(AnalyzerError::NetworkError("late timeout".to_string())),
        );
        assert_eq!(event, SessionEvent::Discarded);
        assert!(session.is_ready());
    }
}
