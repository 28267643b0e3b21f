//! Cross-checks recorded per-file metadata against the real inputs.

use crate::issue::{ConformanceIssue, MetadataField};
use goldcheck_model::FileMetadataRecord;
use sha2::{Digest, Sha256};
use std::io;
use std::path::Path;

/// Facts computed from an input file's raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFacts {
    pub bytes: u64,
    pub lines: u64,
    pub sha256: String,
}

/// Compute byte length, line count, and SHA-256 hex digest.
///
/// Line counting runs over the lossy UTF-8 decoding so it stays
/// well-defined for arbitrary byte content: the number of newlines,
/// plus one when the content is non-empty and not newline-terminated.
/// An empty file has zero lines.
pub fn file_facts(path: &Path) -> io::Result<FileFacts> {
    let data = std::fs::read(path)?;
    let sha256 = format!("{:x}", Sha256::digest(&data));
    let text = String::from_utf8_lossy(&data);
    let mut lines = text.matches('\n').count() as u64;
    if !text.is_empty() && !text.ends_with('\n') {
        lines += 1;
    }
    Ok(FileFacts {
        bytes: data.len() as u64,
        lines,
        sha256,
    })
}

/// Check one `files` entry against the reference inputs directory.
///
/// Only fields the record actually pins are compared; a fixture may
/// omit any of them. A missing input short-circuits the entry — there
/// is nothing to compare against.
pub fn check_file_metadata(record: &FileMetadataRecord, inputs_dir: &Path) -> Vec<ConformanceIssue> {
    let input_path = inputs_dir.join(&record.file_id);
    let facts = match file_facts(&input_path) {
        Ok(facts) => facts,
        Err(_) => {
            return vec![ConformanceIssue::MissingInputFile {
                file_id: record.file_id.clone(),
                path: input_path.display().to_string(),
            }];
        }
    };

    let mut issues = Vec::new();
    if let Some(recorded) = record.bytes
        && recorded != facts.bytes
    {
        issues.push(ConformanceIssue::FileMetadataMismatch {
            file_id: record.file_id.clone(),
            field: MetadataField::Bytes,
            recorded: recorded.to_string(),
            computed: facts.bytes.to_string(),
        });
    }
    if let Some(recorded) = record.lines
        && recorded != facts.lines
    {
        issues.push(ConformanceIssue::FileMetadataMismatch {
            file_id: record.file_id.clone(),
            field: MetadataField::Lines,
            recorded: recorded.to_string(),
            computed: facts.lines.to_string(),
        });
    }
    if let Some(recorded) = &record.sha256
        && *recorded != facts.sha256
    {
        issues.push(ConformanceIssue::FileMetadataMismatch {
            file_id: record.file_id.clone(),
            field: MetadataField::Sha256,
            recorded: recorded.clone(),
            computed: facts.sha256.clone(),
        });
    }
    issues
}
