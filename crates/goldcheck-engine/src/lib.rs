//! # Goldcheck Engine
//!
//! The corpus conformance validation engine:
//!
//! ```text
//! check_corpus          ← discover, parse, dispatch, aggregate
//!     │
//! check_project_index   ← profile_id ordering + recursive per-entry checks
//!     │
//! check_symbol_index    ← symbol/occurrence ordering, stats, file metadata
//!     │
//! check_file_metadata   ← bytes / lines / sha256 against real inputs
//!     │
//! is_sorted             ← the one ordering primitive everything runs on
//! ```
//!
//! Validators are pure functions over parsed documents; the reference
//! inputs directory is always an explicit parameter, never inferred
//! from the document's own location.

pub mod corpus;
pub mod filemeta;
pub mod issue;
pub mod ordering;
pub mod project_index;
pub mod symbol_index;

pub use corpus::{check_corpus, CorpusConfig, CorpusReport, DocumentFailure};
pub use filemeta::{check_file_metadata, file_facts, FileFacts};
pub use issue::{ConformanceIssue, CorpusIssue, IssueScope, MetadataField, StatsField};
pub use ordering::is_sorted;
pub use project_index::check_project_index;
pub use symbol_index::check_symbol_index;

/// Hard failures: the engine could not even run a check. Findings
/// against documents are [`ConformanceIssue`]s, and an unreadable or
/// unparseable document is a per-document [`DocumentFailure`] — the
/// pass keeps going. Only problems with the corpus itself land here.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to read file: {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus directory not found: {0}")]
    CorpusRootMissing(String),

    #[error("no expected documents found under: {0}")]
    EmptyCorpus(String),
}
