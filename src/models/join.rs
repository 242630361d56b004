//! Join configuration models for the SDK

use serde::{Deserialize, Serialize};
use std::fmt;

/// How rows of the two tables are combined
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Right,
    Full,
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JoinType::Inner => "inner",
            JoinType::Left => "left",
            JoinType::Right => "right",
            JoinType::Full => "full",
        };
        f.write_str(s)
    }
}

/// Comparison operator of one join condition
///
/// Wire form is the symbol the execution engine speaks (`=`, `>`, `<`,
/// `>=`, `<=`, `<>`), not the enum's mnemonic name.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Operator {
    #[default]
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = "<>")]
    Neq,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
            Operator::Neq => "<>",
        };
        f.write_str(s)
    }
}

/// One left-column/operator/right-column triple matching rows between the
/// two selected tables
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JoinCondition {
    pub left_column: String,
    pub right_column: String,
    #[serde(default)]
    pub operator: Operator,
}

impl JoinCondition {
    /// Complete iff both column fields are non-empty
    pub fn is_complete(&self) -> bool {
        !self.left_column.is_empty() && !self.right_column.is_empty()
    }
}

/// The mutable join configuration built up by user selections
///
/// Owned and kept consistent by
/// [`JoinConfigState`](crate::config::JoinConfigState); the invariants
/// (non-empty condition list, file-scoped table/column selections) are
/// enforced there, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JoinConfig {
    pub left_file_id: String,
    pub left_table: String,
    pub right_file_id: String,
    pub right_table: String,
    #[serde(default)]
    pub join_type: JoinType,
    pub conditions: Vec<JoinCondition>,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            left_file_id: String::new(),
            left_table: String::new(),
            right_file_id: String::new(),
            right_table: String::new(),
            join_type: JoinType::default(),
            conditions: vec![JoinCondition::default()],
        }
    }
}

impl JoinConfig {
    /// Submit-ready iff both file ids and both tables are selected and
    /// every condition is complete
    pub fn is_submit_ready(&self) -> bool {
        !self.left_file_id.is_empty()
            && !self.right_file_id.is_empty()
            && !self.left_table.is_empty()
            && !self.right_table.is_empty()
            && self.conditions.iter().all(JoinCondition::is_complete)
    }
}
