//! Invariant checks for the wrapped ProjectIndex document shape.

use crate::issue::{ConformanceIssue, IssueScope};
use crate::ordering::is_sorted;
use crate::symbol_index::check_symbol_index;
use goldcheck_model::ProjectIndex;
use std::path::Path;

/// Validate a ProjectIndex wrapper.
///
/// The wrapper's own invariant is the `profile_id` ordering of
/// `indexes`; everything else is the flat SymbolIndex contract applied
/// to each nested entry. Findings come back as `(entry_position,
/// issue)` pairs — wrapper-level findings carry `None` — so the caller
/// can localize each one in the aggregated report.
pub fn check_project_index(
    project: &ProjectIndex,
    inputs_dir: Option<&Path>,
) -> Vec<(Option<usize>, ConformanceIssue)> {
    let mut issues = Vec::new();

    let profile_ids: Vec<&str> = project
        .indexes
        .iter()
        .map(|entry| entry.profile_id.as_str())
        .collect();
    if !is_sorted(&profile_ids) {
        issues.push((
            None,
            ConformanceIssue::OrderingViolation {
                scope: IssueScope::Indexes,
                symbol: None,
            },
        ));
    }

    for (position, entry) in project.indexes.iter().enumerate() {
        for issue in check_symbol_index(&entry.index, inputs_dir) {
            issues.push((Some(position), issue));
        }
    }

    issues
}
