//! # Goldcheck Registry
//!
//! Resolves a file path to the language profile responsible for
//! indexing it. The registry document carries an alias → profile-path
//! map and an ordered list of glob rules; resolution walks the rules
//! top to bottom and the first match wins.
//!
//! Unlike the corpus engine, this path is fail-fast: it answers one
//! query, so the first problem — no rule, unknown alias, broken
//! pattern — is raised immediately instead of accumulated.
//!
//! Glob semantics are gitignore-style and singular: `*` and `?` stop
//! at `/`, `**` crosses path-segment boundaries. There is no weaker
//! fallback matcher.

use globset::GlobBuilder;
use goldcheck_model::Registry;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::{Component, Path};

/// A successful resolution: the winning rule's alias and the profile
/// definition path it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub profile_alias: String,
    pub profile_path: String,
}

/// Failures on the registry query path. First problem wins.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to read file: {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json at {path}: {source}")]
    ParseJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid glob pattern {pattern:?}: {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// A rule matched but its alias is absent from `profiles`. A
    /// registry-integrity defect, surfaced on first use rather than
    /// silently skipped.
    #[error("registry rule refers to unknown profile alias: {alias}")]
    UnknownProfileAlias { alias: String },

    #[error("no matching profile rule for file: {path}")]
    NoMatch { path: String },
}

/// Load and parse a registry document.
pub fn load_registry(path: &Path) -> Result<Registry, RegistryError> {
    let bytes = fs::read(path).map_err(|source| RegistryError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| RegistryError::ParseJson {
        path: path.display().to_string(),
        source,
    })
}

/// Resolve `file_path` against the registry's rules, in declared
/// order. `root`, when given, makes the matched path root-relative.
pub fn resolve_profile(
    registry: &Registry,
    file_path: &Path,
    root: Option<&Path>,
) -> Result<Resolution, RegistryError> {
    let rel = normalize_path(file_path, root);

    for rule in &registry.rules {
        if !glob_matches(&rule.matcher.glob, &rel)? {
            continue;
        }
        let alias = &rule.profile;
        let Some(profile_path) = registry.profiles.get(alias) else {
            return Err(RegistryError::UnknownProfileAlias {
                alias: alias.clone(),
            });
        };
        return Ok(Resolution {
            profile_alias: alias.clone(),
            profile_path: profile_path.clone(),
        });
    }

    Err(RegistryError::NoMatch { path: rel })
}

/// Root-relative, forward-slash form of a path.
///
/// `..` segments stay in the matched string: a path pointing outside
/// the root must not collapse onto a root-level name and quietly claim
/// a rule meant for root files.
fn normalize_path(path: &Path, root: Option<&Path>) -> String {
    let rel = match root {
        Some(root) => path.strip_prefix(root).unwrap_or(path),
        None => path,
    };
    rel.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::ParentDir => Some(Cow::Borrowed("..")),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn glob_matches(pattern: &str, rel: &str) -> Result<bool, RegistryError> {
    let glob = GlobBuilder::new(pattern)
        // gitignore-style: `*` stays inside one path segment, `**` crosses.
        .literal_separator(true)
        .build()
        .map_err(|source| RegistryError::BadPattern {
            pattern: pattern.to_string(),
            source,
        })?;
    Ok(glob.compile_matcher().is_match(rel))
}
