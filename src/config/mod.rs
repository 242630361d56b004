//! Join configuration state machine
//!
//! [`JoinConfigState`] owns the mutable [`JoinConfig`] and keeps it
//! internally consistent as dependent selections change. The rules:
//!
//! - changing a file resets that side's table and clears that side's column
//!   in every condition (sheets and columns are not comparable across
//!   files);
//! - changing a table does *not* clear condition columns; they are
//!   validated lazily at submit time, since column names may collide across
//!   tables;
//! - the condition list never becomes empty;
//! - out-of-range condition indices are no-ops, never panics.

use crate::models::{
    AnalysisResult, JoinCondition, JoinConfig, JoinRequest, JoinType, Operator,
};
use crate::validation::{ValidationError, validate_join_config};
use tracing::debug;

/// Which side of the join a condition column belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Owner of the join configuration and its transition rules
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinConfigState {
    config: JoinConfig,
}

impl JoinConfigState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &JoinConfig {
        &self.config
    }

    /// Seed defaults from a fresh analysis result
    ///
    /// With at least two schemas: left/right file become the first two, in
    /// order; each table becomes that file's first sheet (or stays empty);
    /// join type resets to inner; conditions reset to a single empty
    /// condition. Fewer than two schemas leaves the state untouched.
    ///
    /// Runs once per fresh result; the caller (the session) guards against
    /// re-seeding on user edits.
    pub fn seed_from(&mut self, result: &AnalysisResult) {
        let [left, right, ..] = result.file_schemas.as_slice() else {
            return;
        };
        self.config = JoinConfig {
            left_file_id: left.file_id.clone(),
            left_table: left.first_sheet_name().unwrap_or_default().to_string(),
            right_file_id: right.file_id.clone(),
            right_table: right.first_sheet_name().unwrap_or_default().to_string(),
            join_type: JoinType::Inner,
            conditions: vec![JoinCondition::default()],
        };
        debug!(
            left_file = %self.config.left_file_id,
            right_file = %self.config.right_file_id,
            "seeded join configuration from analysis result"
        );
    }

    /// Select the left file, invalidating the left table and every left
    /// column selection scoped to the previous file
    pub fn set_left_file(&mut self, file_id: impl Into<String>) {
        self.config.left_file_id = file_id.into();
        self.config.left_table.clear();
        for condition in &mut self.config.conditions {
            condition.left_column.clear();
        }
        debug!(file_id = %self.config.left_file_id, "left file changed, left selections reset");
    }

    /// Symmetric to [`set_left_file`](Self::set_left_file)
    pub fn set_right_file(&mut self, file_id: impl Into<String>) {
        self.config.right_file_id = file_id.into();
        self.config.right_table.clear();
        for condition in &mut self.config.conditions {
            condition.right_column.clear();
        }
        debug!(file_id = %self.config.right_file_id, "right file changed, right selections reset");
    }

    /// Select the left table; condition columns are left as-is and checked
    /// at submit time
    pub fn set_left_table(&mut self, sheet_name: impl Into<String>) {
        self.config.left_table = sheet_name.into();
    }

    pub fn set_right_table(&mut self, sheet_name: impl Into<String>) {
        self.config.right_table = sheet_name.into();
    }

    pub fn set_join_type(&mut self, join_type: JoinType) {
        self.config.join_type = join_type;
    }

    /// Set one column of one condition; out-of-range `index` is a no-op
    pub fn set_condition_column(&mut self, index: usize, side: Side, column: impl Into<String>) {
        let Some(condition) = self.config.conditions.get_mut(index) else {
            return;
        };
        match side {
            Side::Left => condition.left_column = column.into(),
            Side::Right => condition.right_column = column.into(),
        }
    }

    /// Set one condition's operator; out-of-range `index` is a no-op
    pub fn set_condition_operator(&mut self, index: usize, operator: Operator) {
        if let Some(condition) = self.config.conditions.get_mut(index) {
            condition.operator = operator;
        }
    }

    pub fn add_condition(&mut self) {
        self.config.conditions.push(JoinCondition::default());
    }

    /// Remove a condition; removing the last remaining condition (or an
    /// out-of-range index) is a no-op: a join with zero conditions is
    /// meaningless and must never be representable
    pub fn remove_condition(&mut self, index: usize) {
        if self.config.conditions.len() > 1 && index < self.config.conditions.len() {
            self.config.conditions.remove(index);
        }
    }

    /// Validate the current configuration for dispatch
    ///
    /// Returns the config unchanged on success, or every unmet check.
    /// Failure leaves the state untouched so the user can fix inputs and
    /// re-validate.
    pub fn validate(&self) -> Result<JoinConfig, Vec<ValidationError>> {
        validate_join_config(&self.config)?;
        Ok(self.config.clone())
    }

    /// Validate and build the outbound join request for the execution
    /// engine
    pub fn to_join_request(&self) -> Result<JoinRequest, Vec<ValidationError>> {
        let config = self.validate()?;
        Ok(JoinRequest {
            left_file_id: config.left_file_id,
            left_table: config.left_table,
            right_file_id: config.right_file_id,
            right_table: config.right_table,
            join_type: config.join_type,
            conditions: config.conditions,
        })
    }
}
