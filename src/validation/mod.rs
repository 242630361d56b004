//! Submit-readiness validation for join configurations
//!
//! Checks are enumerated, not short-circuited: a failed validation returns
//! every unmet check so the caller can report them together.

use crate::models::JoinConfig;

/// One unmet submit-readiness check
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("no left file is selected")]
    MissingLeftFile,
    #[error("no right file is selected")]
    MissingRightFile,
    #[error("join condition {index} is missing a column selection")]
    IncompleteCondition { index: usize },
}

/// Validate a join configuration for dispatch
///
/// Checks, in order: left file selected, right file selected, every
/// condition has both columns. Returns all violations. Pure: the config is
/// not touched, so calling twice without intervening mutation yields the
/// same answer.
pub fn validate_join_config(config: &JoinConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.left_file_id.is_empty() {
        errors.push(ValidationError::MissingLeftFile);
    }
    if config.right_file_id.is_empty() {
        errors.push(ValidationError::MissingRightFile);
    }
    for (index, condition) in config.conditions.iter().enumerate() {
        if !condition.is_complete() {
            errors.push(ValidationError::IncompleteCondition { index });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
