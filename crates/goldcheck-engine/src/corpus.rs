//! Corpus discovery: walk the corpus tree, dispatch each expected
//! document to the right validator, aggregate one deterministic report.

use crate::issue::{ConformanceIssue, CorpusIssue};
use crate::project_index::check_project_index;
use crate::symbol_index::check_symbol_index;
use crate::EngineError;
use goldcheck_model::Document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the corpus lives and what its case layout is called.
///
/// The layout convention — each case directory holding an
/// `expected/` of golden documents beside an `inputs/` of reference
/// sources — is configuration, not path arithmetic buried in the
/// walker.
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    pub corpus_root: PathBuf,
    pub expected_dir_name: String,
    pub inputs_dir_name: String,
}

impl CorpusConfig {
    pub fn new(corpus_root: impl Into<PathBuf>) -> Self {
        Self {
            corpus_root: corpus_root.into(),
            expected_dir_name: "expected".to_string(),
            inputs_dir_name: "inputs".to_string(),
        }
    }
}

/// A document that could not be read or parsed at all. Fatal for that
/// document only; the pass continues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFailure {
    pub document: PathBuf,
    pub error: String,
}

impl fmt::Display for DocumentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.document.display(), self.error)
    }
}

/// Everything one corpus pass found, in discovery order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusReport {
    pub documents_checked: usize,
    pub issues: Vec<CorpusIssue>,
    pub failures: Vec<DocumentFailure>,
}

impl CorpusReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.failures.is_empty()
    }

    /// All findings rendered as report lines, interleaved back into
    /// document discovery order. Both lists are already sorted by
    /// document (the pass appends while walking sorted paths), so this
    /// is a plain two-way merge.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.failures.len() + self.issues.len());
        let mut failures = self.failures.iter().peekable();
        let mut issues = self.issues.iter().peekable();
        loop {
            let take_failure = match (failures.peek(), issues.peek()) {
                (Some(failure), Some(issue)) => failure.document <= issue.document,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            if take_failure {
                if let Some(failure) = failures.next() {
                    lines.push(failure.to_string());
                }
            } else if let Some(issue) = issues.next() {
                lines.push(issue.to_string());
            }
        }
        lines
    }
}

/// Run the conformance pass over every expected document under the
/// corpus root.
///
/// Documents are discovered as `**/<expected>/*.expected.json` and
/// processed in path-lexicographic order, so repeated runs over the
/// same inputs produce byte-identical reports. A missing root or an
/// empty corpus is an [`EngineError`]: a CI step pointed at nothing
/// must not pass silently.
pub fn check_corpus(config: &CorpusConfig) -> Result<CorpusReport, EngineError> {
    if !config.corpus_root.is_dir() {
        return Err(EngineError::CorpusRootMissing(
            config.corpus_root.display().to_string(),
        ));
    }

    let mut documents = Vec::new();
    collect_expected_documents(&config.corpus_root, &config.expected_dir_name, &mut documents)?;
    documents.sort();

    if documents.is_empty() {
        return Err(EngineError::EmptyCorpus(
            config.corpus_root.display().to_string(),
        ));
    }

    let mut report = CorpusReport {
        documents_checked: documents.len(),
        ..CorpusReport::default()
    };

    for document in documents {
        check_document(&document, config, &mut report);
    }

    Ok(report)
}

fn check_document(document: &Path, config: &CorpusConfig, report: &mut CorpusReport) {
    let bytes = match fs::read(document) {
        Ok(bytes) => bytes,
        Err(error) => {
            report.failures.push(DocumentFailure {
                document: document.to_path_buf(),
                error: format!("read failed: {error}"),
            });
            return;
        }
    };
    let value: serde_json::Value = match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(error) => {
            report.failures.push(DocumentFailure {
                document: document.to_path_buf(),
                error: format!("invalid json: {error}"),
            });
            return;
        }
    };

    let inputs_dir = case_inputs_dir(document, config);
    match Document::from_value(value) {
        Ok(Document::Project(project)) => {
            for (entry, issue) in check_project_index(&project, inputs_dir.as_deref()) {
                report.issues.push(CorpusIssue {
                    document: document.to_path_buf(),
                    entry,
                    issue,
                });
            }
        }
        Ok(Document::Symbols(index)) => {
            for issue in check_symbol_index(&index, inputs_dir.as_deref()) {
                report.issues.push(CorpusIssue {
                    document: document.to_path_buf(),
                    entry: None,
                    issue,
                });
            }
        }
        Err(_) => {
            report.issues.push(CorpusIssue {
                document: document.to_path_buf(),
                entry: None,
                issue: ConformanceIssue::SchemaVersionUnrecognized,
            });
        }
    }
}

/// The reference-inputs directory for a case: sibling of the expected
/// directory the document sits in.
fn case_inputs_dir(document: &Path, config: &CorpusConfig) -> Option<PathBuf> {
    let expected_dir = document.parent()?;
    let case_root = expected_dir.parent()?;
    Some(case_root.join(&config.inputs_dir_name))
}

fn collect_expected_documents(
    dir: &Path,
    expected_dir_name: &str,
    out: &mut Vec<PathBuf>,
) -> Result<(), EngineError> {
    let entries = fs::read_dir(dir).map_err(|source| EngineError::ReadFile {
        path: dir.display().to_string(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| EngineError::ReadFile {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_expected_documents(&path, expected_dir_name, out)?;
        } else if is_expected_document(&path, expected_dir_name) {
            out.push(path);
        }
    }
    Ok(())
}

fn is_expected_document(path: &Path, expected_dir_name: &str) -> bool {
    let in_expected_dir = path
        .parent()
        .and_then(Path::file_name)
        .is_some_and(|name| name == expected_dir_name);
    let expected_suffix = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".expected.json"));
    in_expected_dir && expected_suffix
}
