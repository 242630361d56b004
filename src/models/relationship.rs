//! Relationship model for the SDK
//!
//! A relationship is an analyzer-suggested column-to-column correspondence
//! across two files. Purely descriptive: it informs the user, it never
//! configures the join by itself.

use serde::{Deserialize, Serialize};

/// Tag the analyzer assigns when two columns look joinable
pub const POTENTIAL_JOIN: &str = "potential_join";
/// Tag for sheets sharing an identical column set
pub const SAME_SCHEMA: &str = "same_schema";
/// Tag for columns with overlapping value ranges
pub const DATA_OVERLAP: &str = "data_overlap";

/// Candidate link between one column of one file and one column of another
///
/// `relationship_type` is an open tag: the analyzer may emit values beyond
/// the constants above, and they are carried through unparsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Relationship {
    pub source_file: String,
    pub source_sheet: String,
    pub source_column: String,
    pub target_file: String,
    pub target_sheet: String,
    pub target_column: String,
    pub relationship_type: String,
}

impl Relationship {
    pub fn is_potential_join(&self) -> bool {
        self.relationship_type == POTENTIAL_JOIN
    }

    /// Whether this relationship links the given pair of files, in either
    /// direction
    pub fn links(&self, file_a: &str, file_b: &str) -> bool {
        (self.source_file == file_a && self.target_file == file_b)
            || (self.source_file == file_b && self.target_file == file_a)
    }
}
