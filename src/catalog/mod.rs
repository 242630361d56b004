//! Derived lookup views over an analysis result
//!
//! Sheets depend on the selected file and columns depend on the selected
//! sheet, so option lists are recomputed from the immutable
//! [`AnalysisResult`] on every query instead of being cached alongside the
//! mutable configuration. Absence (unknown file, unknown sheet, no analysis
//! yet) is represented as emptiness, never as an error, so callers stay
//! renderable during partial selections.

use crate::models::{AnalysisResult, FileSchema, Relationship};

/// Read-only view answering "what sheets/columns exist for file X"
#[derive(Debug, Clone, Copy)]
pub struct SchemaCatalog<'a> {
    schemas: &'a [FileSchema],
}

impl<'a> SchemaCatalog<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self {
            schemas: &result.file_schemas,
        }
    }

    /// A catalog with no schemas, used while no analysis result is held
    pub fn empty() -> Self {
        Self { schemas: &[] }
    }

    pub fn schema_of(&self, file_id: &str) -> Option<&'a FileSchema> {
        self.schemas.iter().find(|s| s.file_id == file_id)
    }

    /// Sheet names of a file, in schema order; empty if the file is unknown
    pub fn sheets_of(&self, file_id: &str) -> Vec<&'a str> {
        self.schema_of(file_id)
            .map(|schema| schema.sheets.iter().map(|s| s.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Column names of a sheet, in sheet order; empty if the file or sheet
    /// is unknown
    pub fn columns_of(&self, file_id: &str, sheet_name: &str) -> &'a [String] {
        self.schema_of(file_id)
            .and_then(|schema| schema.sheet(sheet_name))
            .map(|sheet| sheet.columns.as_slice())
            .unwrap_or(&[])
    }

    pub fn file_ids(&self) -> impl Iterator<Item = &'a str> {
        self.schemas.iter().map(|s| s.file_id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// Read-only view over the analyzer's discovered relationships
///
/// Advisory only: relationships are shown to the user, they never feed the
/// join configuration by themselves.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipSet<'a> {
    relationships: &'a [Relationship],
}

impl<'a> RelationshipSet<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self {
            relationships: &result.relationships,
        }
    }

    pub fn empty() -> Self {
        Self { relationships: &[] }
    }

    pub fn all(&self) -> &'a [Relationship] {
        self.relationships
    }

    /// Relationships linking the given pair of files, in either direction,
    /// input order preserved
    pub fn between(&self, file_a: &str, file_b: &str) -> Vec<&'a Relationship> {
        self.relationships
            .iter()
            .filter(|r| r.links(file_a, file_b))
            .collect()
    }

    pub fn potential_joins(&self) -> impl Iterator<Item = &'a Relationship> {
        self.relationships.iter().filter(|r| r.is_potential_join())
    }

    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }
}
