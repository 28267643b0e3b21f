//! # Goldcheck Model
//!
//! Document shapes for golden symbol-index corpora:
//!
//! ```text
//! Document              ← tagged union, dispatched once on schema_version
//!     │
//! ProjectIndex          ← wrapper: per-profile indexes for one snapshot
//!     │
//! SymbolIndex           ← flat: files + symbols for one language profile
//!     │
//! SymbolRecord          ← identifier + occurrences + optional stats
//!     │
//! OccurrenceKey         ← (file_id, line, col_start, col_end)
//! ```
//!
//! Plus the profile [`Registry`] shape consumed by goldcheck-registry.
//!
//! This crate only models shape. Ordering, uniqueness, and metadata
//! invariants live in goldcheck-engine.

pub mod document;
pub mod registry;

pub use document::{
    Document, FileMetadataRecord, OccurrenceKey, ProfileIndexEntry, ProjectIndex, Stats,
    SymbolIndex, SymbolRecord, UnrecognizedDocument, PROJECT_SCHEMA_VERSION,
};
pub use registry::{MatchSpec, Registry, RegistryRule};
