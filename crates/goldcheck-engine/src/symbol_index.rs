//! Invariant checks for one flat SymbolIndex document.

use crate::filemeta::check_file_metadata;
use crate::issue::{ConformanceIssue, IssueScope, StatsField};
use crate::ordering::is_sorted;
use goldcheck_model::{OccurrenceKey, SymbolIndex, SymbolRecord};
use std::collections::BTreeSet;
use std::path::Path;

/// Validate one SymbolIndex against its contract.
///
/// Accumulate-and-report: every check runs, nothing short-circuits on
/// the first finding. A malformed occurrence entry drops out of the
/// ordering and uniqueness checks for its symbol but never stops the
/// rest of the document.
///
/// `inputs_dir` is the reference source directory for the document's
/// `files` entries. `None` (or a directory that does not exist) skips
/// metadata cross-checking; fixtures without pinned inputs are legal.
pub fn check_symbol_index(index: &SymbolIndex, inputs_dir: Option<&Path>) -> Vec<ConformanceIssue> {
    let mut issues = Vec::new();

    if let Some(dir) = inputs_dir
        && dir.is_dir()
    {
        for record in &index.files {
            issues.extend(check_file_metadata(record, dir));
        }
    }

    let identifiers: Vec<&str> = index
        .symbols
        .iter()
        .map(|symbol| symbol.identifier.as_str())
        .collect();
    if !is_sorted(&identifiers) {
        issues.push(ConformanceIssue::OrderingViolation {
            scope: IssueScope::Symbols,
            symbol: None,
        });
    }

    for symbol in &index.symbols {
        check_symbol(symbol, &mut issues);
    }

    issues
}

fn check_symbol(symbol: &SymbolRecord, issues: &mut Vec<ConformanceIssue>) {
    let mut keys = Vec::with_capacity(symbol.occurrences.len());
    for occurrence in &symbol.occurrences {
        match OccurrenceKey::from_occurrence(occurrence) {
            Some(key) => keys.push(key),
            None => issues.push(ConformanceIssue::MalformedOccurrence {
                symbol: symbol.identifier.clone(),
                raw: occurrence.to_string(),
            }),
        }
    }

    if !is_sorted(&keys) {
        issues.push(ConformanceIssue::OrderingViolation {
            scope: IssueScope::Occurrences,
            symbol: Some(symbol.identifier.clone()),
        });
    }

    let distinct: BTreeSet<&OccurrenceKey> = keys.iter().collect();
    if distinct.len() < keys.len() {
        issues.push(ConformanceIssue::DuplicateOccurrence {
            symbol: symbol.identifier.clone(),
        });
    }

    let Some(stats) = &symbol.stats else {
        return;
    };

    if let Some(recorded) = stats.occurrence_count {
        // Against the full list; malformed entries still occupy a slot.
        let computed = symbol.occurrences.len() as u64;
        if recorded != computed {
            issues.push(ConformanceIssue::StatsMismatch {
                symbol: symbol.identifier.clone(),
                field: StatsField::OccurrenceCount,
                computed,
                recorded,
            });
        }
    }

    if let Some(recorded) = stats.unique_line_count {
        let pairs: BTreeSet<(String, u64)> = symbol
            .occurrences
            .iter()
            .filter_map(OccurrenceKey::line_pair)
            .collect();
        let computed = pairs.len() as u64;
        if recorded != computed {
            issues.push(ConformanceIssue::StatsMismatch {
                symbol: symbol.identifier.clone(),
                field: StatsField::UniqueLineCount,
                computed,
                recorded,
            });
        }
    }
}
