//! Typed findings produced by the conformance checks.
//!
//! A finding is data, not an error: the engine accumulates every one
//! of them across a run and only the CLI decides the exit code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Which ordered sequence an [`ConformanceIssue::OrderingViolation`]
/// refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueScope {
    /// `symbols`, ordered by identifier.
    Symbols,
    /// One symbol's `occurrences`, ordered by the four-field key.
    Occurrences,
    /// A ProjectIndex's `indexes`, ordered by profile_id.
    Indexes,
}

/// Recorded stats field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsField {
    OccurrenceCount,
    UniqueLineCount,
}

impl StatsField {
    pub fn as_str(self) -> &'static str {
        match self {
            StatsField::OccurrenceCount => "occurrence_count",
            StatsField::UniqueLineCount => "unique_line_count",
        }
    }
}

/// Recorded per-file metadata field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataField {
    Bytes,
    Lines,
    Sha256,
}

impl MetadataField {
    pub fn as_str(self) -> &'static str {
        match self {
            MetadataField::Bytes => "bytes",
            MetadataField::Lines => "lines",
            MetadataField::Sha256 => "sha256",
        }
    }
}

/// One invariant violation found in one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConformanceIssue {
    /// A sequence that the contract requires sorted is not.
    OrderingViolation {
        scope: IssueScope,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        symbol: Option<String>,
    },

    /// Two occurrences of a symbol share the exact four-field key.
    DuplicateOccurrence { symbol: String },

    /// A recorded stats counter disagrees with the occurrence data.
    /// `computed` is derived from the occurrences, `recorded` is what
    /// the document claims.
    StatsMismatch {
        symbol: String,
        field: StatsField,
        computed: u64,
        recorded: u64,
    },

    /// An occurrence entry is missing a required ordering field or
    /// carries it with the wrong type. The entry is excluded from
    /// ordering and uniqueness checks; the rest of the symbol is not.
    MalformedOccurrence { symbol: String, raw: String },

    /// A `files` entry references an input that does not exist under
    /// the reference directory.
    MissingInputFile { file_id: String, path: String },

    /// A recorded metadata field disagrees with the real input file.
    /// `recorded` is the fixture's value, `computed` the actual one.
    FileMetadataMismatch {
        file_id: String,
        field: MetadataField,
        recorded: String,
        computed: String,
    },

    /// The document is neither a ProjectIndex nor a SymbolIndex.
    SchemaVersionUnrecognized,
}

impl fmt::Display for ConformanceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConformanceIssue::OrderingViolation { scope, symbol } => match (scope, symbol) {
                (IssueScope::Symbols, _) => write!(f, "symbols not sorted by identifier"),
                (IssueScope::Occurrences, Some(symbol)) => {
                    write!(f, "{symbol}: occurrences not sorted")
                }
                (IssueScope::Occurrences, None) => write!(f, "occurrences not sorted"),
                (IssueScope::Indexes, _) => {
                    write!(f, "ProjectIndex.indexes not sorted by profile_id")
                }
            },
            ConformanceIssue::DuplicateOccurrence { symbol } => {
                write!(f, "{symbol}: duplicate occurrences found")
            }
            ConformanceIssue::StatsMismatch {
                symbol,
                field,
                computed,
                recorded,
            } => write!(
                f,
                "{symbol}: stats.{}={recorded} != {computed}",
                field.as_str()
            ),
            ConformanceIssue::MalformedOccurrence { symbol, raw } => {
                write!(f, "{symbol}: malformed occurrence {raw}")
            }
            ConformanceIssue::MissingInputFile { path, .. } => {
                write!(f, "input file missing: {path}")
            }
            ConformanceIssue::FileMetadataMismatch {
                file_id,
                field,
                recorded,
                computed,
            } => match field {
                // Full digests would bloat the report line.
                MetadataField::Sha256 => write!(f, "{file_id}: sha256 mismatch"),
                _ => write!(
                    f,
                    "{file_id}: {}={recorded} != {computed}",
                    field.as_str()
                ),
            },
            ConformanceIssue::SchemaVersionUnrecognized => {
                write!(f, "unrecognized document shape (not SymbolIndex or ProjectIndex)")
            }
        }
    }
}

/// A finding located in the corpus: which document, and for wrapped
/// documents which nested index entry, produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusIssue {
    pub document: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<usize>,
    pub issue: ConformanceIssue,
}

impl fmt::Display for CorpusIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entry {
            Some(entry) => write!(
                f,
                "{} (indexes[{entry}]): {}",
                self.document.display(),
                self.issue
            ),
            None => write!(f, "{}: {}", self.document.display(), self.issue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_ordering_violation_lines() {
        let symbols = ConformanceIssue::OrderingViolation {
            scope: IssueScope::Symbols,
            symbol: None,
        };
        assert_eq!(symbols.to_string(), "symbols not sorted by identifier");

        let occurrences = ConformanceIssue::OrderingViolation {
            scope: IssueScope::Occurrences,
            symbol: Some("alpha".to_string()),
        };
        assert_eq!(occurrences.to_string(), "alpha: occurrences not sorted");
    }

    #[test]
    fn renders_stats_mismatch_with_both_values() {
        let issue = ConformanceIssue::StatsMismatch {
            symbol: "alpha".to_string(),
            field: StatsField::OccurrenceCount,
            computed: 1,
            recorded: 2,
        };
        assert_eq!(issue.to_string(), "alpha: stats.occurrence_count=2 != 1");
    }

    #[test]
    fn sha256_mismatch_elides_digests() {
        let issue = ConformanceIssue::FileMetadataMismatch {
            file_id: "a.txt".to_string(),
            field: MetadataField::Sha256,
            recorded: "0".repeat(64),
            computed: "1".repeat(64),
        };
        assert_eq!(issue.to_string(), "a.txt: sha256 mismatch");
    }

    #[test]
    fn corpus_issue_tags_nested_entry_position() {
        let issue = CorpusIssue {
            document: PathBuf::from("corpus/case/expected/out.expected.json"),
            entry: Some(1),
            issue: ConformanceIssue::DuplicateOccurrence {
                symbol: "alpha".to_string(),
            },
        };
        assert_eq!(
            issue.to_string(),
            "corpus/case/expected/out.expected.json (indexes[1]): alpha: duplicate occurrences found"
        );
    }

    #[test]
    fn issues_serialize_with_kind_tags() {
        let issue = ConformanceIssue::MissingInputFile {
            file_id: "a.txt".to_string(),
            path: "corpus/case/inputs/a.txt".to_string(),
        };
        let value = serde_json::to_value(&issue).expect("issue should serialize");
        assert_eq!(value["kind"], "missing_input_file");
        assert_eq!(value["file_id"], "a.txt");
    }
}
