//! File schema models for the SDK

use super::relationship::Relationship;
use serde::{Deserialize, Serialize};

/// One sheet (table) of a file: a name and its ordered column names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetSchema {
    pub name: String,
    pub columns: Vec<String>,
}

/// Schema of a single uploaded file
///
/// Immutable once received from the analyzer. Sheet names are unique within
/// a file and column names are unique within a sheet.
///
/// On the wire `sheets` is a single JSON object mapping sheet name to its
/// column list (`{"Sheet1": ["id", "name"]}`); sheet order is preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileSchema {
    pub file_id: String,
    pub filename: String,
    #[serde(with = "sheet_map", default)]
    pub sheets: Vec<SheetSchema>,
}

impl FileSchema {
    pub fn new(file_id: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            filename: filename.into(),
            sheets: Vec::new(),
        }
    }

    pub fn with_sheet(
        mut self,
        name: impl Into<String>,
        columns: Vec<impl Into<String>>,
    ) -> Self {
        self.sheets.push(SheetSchema {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn sheet(&self, name: &str) -> Option<&SheetSchema> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Name of the first sheet, used when seeding default selections
    pub fn first_sheet_name(&self) -> Option<&str> {
        self.sheets.first().map(|s| s.name.as_str())
    }
}

/// Result of one multi-file analysis call
///
/// Produced atomically by the analyzer; held read-only for the duration of
/// a session. A new analysis with a changed file-id set replaces it
/// wholesale, never partially.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    #[serde(default)]
    pub file_schemas: Vec<FileSchema>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Serde adapter presenting `Vec<SheetSchema>` as a JSON object keyed by
/// sheet name, preserving sheet order in both directions.
mod sheet_map {
    use super::SheetSchema;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(sheets: &[SheetSchema], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(sheets.len()))?;
        for sheet in sheets {
            map.serialize_entry(&sheet.name, &sheet.columns)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<SheetSchema>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SheetMapVisitor;

        impl<'de> Visitor<'de> for SheetMapVisitor {
            type Value = Vec<SheetSchema>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of sheet name to column list")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut sheets = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, columns)) = access.next_entry::<String, Vec<String>>()? {
                    sheets.push(SheetSchema { name, columns });
                }
                Ok(sheets)
            }
        }

        deserializer.deserialize_map(SheetMapVisitor)
    }
}
