//! SymbolIndex and ProjectIndex document shapes.
//!
//! Occurrence entries stay raw [`serde_json::Value`]s: one malformed
//! entry must be reportable on its own without poisoning the rest of
//! the document, so key extraction is explicit and per-entry.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `schema_version` value that selects the wrapped ProjectIndex shape.
pub const PROJECT_SCHEMA_VERSION: &str = "2.3";

/// A flat index document: all symbols and their occurrences for one
/// language profile over one set of input files.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SymbolIndex {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    #[serde(default)]
    pub files: Vec<FileMetadataRecord>,
    #[serde(default)]
    pub symbols: Vec<SymbolRecord>,
}

/// Per-file metadata recorded by the indexer. Absent fields are not
/// pinned by the fixture and must not be checked.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileMetadataRecord {
    pub file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

/// One symbol and every recorded location where it appears.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SymbolRecord {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub occurrences: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
}

/// Derived, advisory counters attached to a symbol.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Stats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurrence_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_line_count: Option<u64>,
}

/// A wrapper document aggregating per-profile indexes for one project
/// snapshot.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectIndex {
    pub schema_version: String,
    #[serde(default)]
    pub indexes: Vec<ProfileIndexEntry>,
}

/// One nested per-profile index inside a [`ProjectIndex`]. Read as a
/// [`SymbolIndex`] plus the profile identifier the wrapper sorts on.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProfileIndexEntry {
    #[serde(default)]
    pub profile_id: String,
    #[serde(flatten)]
    pub index: SymbolIndex,
}

/// A parsed corpus document, dispatched once on its version
/// discriminant rather than probed attribute-by-attribute.
#[derive(Debug, Clone)]
pub enum Document {
    Project(ProjectIndex),
    Symbols(SymbolIndex),
}

/// The value is neither a ProjectIndex nor a SymbolIndex by shape.
#[derive(Debug, thiserror::Error)]
#[error("document not recognized as SymbolIndex or ProjectIndex")]
pub struct UnrecognizedDocument;

impl Document {
    /// Classify a parsed JSON value as a corpus document.
    ///
    /// `schema_version == "2.3"` selects the wrapped ProjectIndex
    /// shape. Anything else must carry a `symbols` or `files` array to
    /// count as a flat SymbolIndex.
    pub fn from_value(value: Value) -> Result<Self, UnrecognizedDocument> {
        let Some(object) = value.as_object() else {
            return Err(UnrecognizedDocument);
        };

        let is_project = object
            .get("schema_version")
            .and_then(Value::as_str)
            .is_some_and(|v| v == PROJECT_SCHEMA_VERSION);

        if is_project {
            return serde_json::from_value::<ProjectIndex>(value)
                .map(Document::Project)
                .map_err(|_| UnrecognizedDocument);
        }

        let has_index_shape = object.get("symbols").is_some_and(Value::is_array)
            || object.get("files").is_some_and(Value::is_array);
        if !has_index_shape {
            return Err(UnrecognizedDocument);
        }

        serde_json::from_value::<SymbolIndex>(value)
            .map(Document::Symbols)
            .map_err(|_| UnrecognizedDocument)
    }
}

/// The four-field key every ordering and uniqueness check runs on.
///
/// Field order carries the comparison order: `(file_id, line,
/// col_start, col_end)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OccurrenceKey {
    pub file_id: String,
    pub line: u64,
    pub col_start: u64,
    pub col_end: u64,
}

impl OccurrenceKey {
    /// Extract the ordering key from a raw occurrence entry.
    ///
    /// Strict coercion: `file_id` must be a JSON string, the three
    /// position fields non-negative JSON integers. `None` marks the
    /// entry malformed; the caller decides how to report it.
    pub fn from_occurrence(occurrence: &Value) -> Option<Self> {
        let object = occurrence.as_object()?;
        Some(Self {
            file_id: object.get("file_id")?.as_str()?.to_string(),
            line: object.get("line")?.as_u64()?,
            col_start: object.get("col_start")?.as_u64()?,
            col_end: object.get("col_end")?.as_u64()?,
        })
    }

    /// The `(file_id, line)` pair used for unique-line counting, for
    /// any occurrence that carries both fields — the column bounds may
    /// be malformed or missing without disqualifying the pair.
    pub fn line_pair(occurrence: &Value) -> Option<(String, u64)> {
        let object = occurrence.as_object()?;
        Some((
            object.get("file_id")?.as_str()?.to_string(),
            object.get("line")?.as_u64()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatches_project_wrapper_on_schema_version() {
        let value = json!({
            "schema_version": "2.3",
            "indexes": [
                {"profile_id": "go", "symbols": []},
                {"profile_id": "python", "symbols": []}
            ]
        });
        match Document::from_value(value).expect("project shape") {
            Document::Project(project) => {
                assert_eq!(project.indexes.len(), 2);
                assert_eq!(project.indexes[0].profile_id, "go");
            }
            Document::Symbols(_) => panic!("expected project dispatch"),
        }
    }

    #[test]
    fn dispatches_flat_symbol_index_without_discriminant() {
        let value = json!({
            "symbols": [{"identifier": "alpha", "occurrences": []}]
        });
        match Document::from_value(value).expect("symbol index shape") {
            Document::Symbols(index) => {
                assert_eq!(index.symbols.len(), 1);
                assert_eq!(index.symbols[0].identifier, "alpha");
            }
            Document::Project(_) => panic!("expected flat dispatch"),
        }
    }

    #[test]
    fn files_only_document_counts_as_symbol_index() {
        let value = json!({
            "files": [{"file_id": "a.txt", "bytes": 4}]
        });
        let document = Document::from_value(value).expect("files-only shape");
        match document {
            Document::Symbols(index) => {
                assert_eq!(index.files[0].file_id, "a.txt");
                assert_eq!(index.files[0].bytes, Some(4));
                assert_eq!(index.files[0].lines, None);
            }
            Document::Project(_) => panic!("expected flat dispatch"),
        }
    }

    #[test]
    fn rejects_unrecognized_shapes() {
        assert!(Document::from_value(json!([1, 2, 3])).is_err());
        assert!(Document::from_value(json!({"hello": "world"})).is_err());
        assert!(Document::from_value(json!({"symbols": "not-an-array"})).is_err());
    }

    #[test]
    fn occurrence_key_requires_all_four_fields_strictly_typed() {
        let good = json!({"file_id": "a.rs", "line": 3, "col_start": 1, "col_end": 5});
        let key = OccurrenceKey::from_occurrence(&good).expect("well-formed occurrence");
        assert_eq!(key.file_id, "a.rs");
        assert_eq!(key.line, 3);

        let missing = json!({"file_id": "a.rs", "line": 3, "col_start": 1});
        assert!(OccurrenceKey::from_occurrence(&missing).is_none());

        let stringly = json!({"file_id": "a.rs", "line": "3", "col_start": 1, "col_end": 5});
        assert!(OccurrenceKey::from_occurrence(&stringly).is_none());

        let negative = json!({"file_id": "a.rs", "line": -1, "col_start": 1, "col_end": 5});
        assert!(OccurrenceKey::from_occurrence(&negative).is_none());
    }

    #[test]
    fn occurrence_keys_order_by_file_then_position() {
        let a = OccurrenceKey {
            file_id: "a.rs".to_string(),
            line: 9,
            col_start: 0,
            col_end: 0,
        };
        let b = OccurrenceKey {
            file_id: "b.rs".to_string(),
            line: 1,
            col_start: 0,
            col_end: 0,
        };
        assert!(a < b);

        let earlier_col = OccurrenceKey {
            col_start: 2,
            ..a.clone()
        };
        let later_col = OccurrenceKey {
            col_start: 4,
            ..a.clone()
        };
        assert!(earlier_col < later_col);
    }

    #[test]
    fn line_pair_tolerates_malformed_columns() {
        let occurrence = json!({"file_id": "a.rs", "line": 7, "col_start": "bad"});
        assert_eq!(
            OccurrenceKey::line_pair(&occurrence),
            Some(("a.rs".to_string(), 7))
        );
        assert_eq!(OccurrenceKey::line_pair(&json!({"line": 7})), None);
    }

    #[test]
    fn symbol_index_serializes_with_absent_fields_skipped() {
        let index = SymbolIndex {
            schema_version: Some("2.1".to_string()),
            files: vec![FileMetadataRecord {
                file_id: "a.txt".to_string(),
                bytes: Some(4),
                lines: Some(1),
                sha256: None,
            }],
            symbols: vec![SymbolRecord {
                identifier: "alpha".to_string(),
                occurrences: Vec::new(),
                stats: Some(Stats {
                    occurrence_count: Some(0),
                    unique_line_count: None,
                }),
            }],
        };
        insta::assert_json_snapshot!(index, @r#"
        {
          "schema_version": "2.1",
          "files": [
            {
              "file_id": "a.txt",
              "bytes": 4,
              "lines": 1
            }
          ],
          "symbols": [
            {
              "identifier": "alpha",
              "occurrences": [],
              "stats": {
                "occurrence_count": 0
              }
            }
          ]
        }
        "#);
    }

    #[test]
    fn byte_offsets_survive_round_trip_untouched() {
        let value = json!({
            "symbols": [{
                "identifier": "alpha",
                "occurrences": [
                    {"file_id": "a.rs", "line": 1, "col_start": 0, "col_end": 5,
                     "byte_start": 10, "byte_end": 15}
                ]
            }]
        });
        let Document::Symbols(index) = Document::from_value(value).expect("shape") else {
            panic!("expected flat dispatch");
        };
        let raw = &index.symbols[0].occurrences[0];
        assert_eq!(raw.get("byte_start").and_then(Value::as_u64), Some(10));
        assert!(OccurrenceKey::from_occurrence(raw).is_some());
    }
}
