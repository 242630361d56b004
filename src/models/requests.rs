//! Outbound request contracts for the execution engine
//!
//! These are wire types only. The SDK builds and validates them; executing
//! a join, merge or cross-file reference is the engine's job.

use super::join::{JoinCondition, JoinType};
use serde::{Deserialize, Serialize};

/// Precondition violation detected before a request is dispatched
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("file_ids and tables must have the same length ({file_ids} vs {tables})")]
    MismatchedTables { file_ids: usize, tables: usize },
    #[error("at least 2 files are required, got {0}")]
    TooFewFiles(usize),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Join request handed to the execution engine
///
/// Emitted only after [`JoinConfigState::validate`]
/// (crate::config::JoinConfigState::validate) succeeds. Top-level fields
/// are camelCase per the collaborator contract; condition fields stay
/// snake_case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub left_file_id: String,
    pub left_table: String,
    pub right_file_id: String,
    pub right_table: String,
    pub join_type: JoinType,
    pub conditions: Vec<JoinCondition>,
}

/// How merged rows or columns are stacked
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MergeType {
    #[default]
    Vertical,
    Horizontal,
}

/// Merge request: stack the named table of each file into one output sheet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MergeRequest {
    pub file_ids: Vec<String>,
    pub tables: Vec<String>,
    #[serde(default)]
    pub merge_type: MergeType,
    pub output_sheet_name: String,
}

impl MergeRequest {
    /// The engine rejects mismatched lists and fewer than two files; check
    /// the same preconditions client-side before dispatch
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.file_ids.len() != self.tables.len() {
            return Err(RequestError::MismatchedTables {
                file_ids: self.file_ids.len(),
                tables: self.tables.len(),
            });
        }
        if self.file_ids.len() < 2 {
            return Err(RequestError::TooFewFiles(self.file_ids.len()));
        }
        Ok(())
    }
}

/// How a cross-file reference materializes in the target sheet
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceType {
    #[default]
    Copy,
    Formula,
}

/// Cross-file reference request: bring one column of a source table into a
/// target table, by value or by formula
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrossReferenceRequest {
    pub source_file_id: String,
    pub source_table: String,
    pub source_column: String,
    pub target_file_id: String,
    pub target_table: String,
    pub target_column: String,
    #[serde(default)]
    pub reference_type: ReferenceType,
    /// When absent the target table is modified in place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_sheet_name: Option<String>,
}

impl CrossReferenceRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        let required = [
            ("source_file_id", self.source_file_id.as_str()),
            ("source_table", self.source_table.as_str()),
            ("source_column", self.source_column.as_str()),
            ("target_file_id", self.target_file_id.as_str()),
            ("target_table", self.target_table.as_str()),
            ("target_column", self.target_column.as_str()),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(RequestError::MissingField(field));
            }
        }
        Ok(())
    }
}
