//! Spelling-correction engine built on a symmetric-delete index.
//!
//! Given a misspelled token, the engine returns up to K dictionary words
//! ranked by edit distance (ascending), then corpus frequency (descending).
//! The dictionary is a plain word/frequency list loaded once at startup.
//!
//! # Architecture
//!
//! - [`distance`] -- bounded optimal-string-alignment distance verifier
//! - [`index`] -- deletion-neighborhood enumeration and the posting-list index
//! - [`corrector`] -- candidate generation, verification, ranking, top-K
//! - [`dictionary`] -- dictionary file parsing
//! - [`handle`] -- top-level handle owning a configured corrector
//!
//! Lookup is sub-linear in dictionary size: the index maps every string
//! obtainable from a word by up to d deletions back to that word, so two
//! words within edit distance d of each other always share at least one
//! deletion key. Posting lists only propose candidates; the distance
//! verifier is the sole gatekeeper of correctness.

use std::path::PathBuf;

pub mod corrector;
pub mod dictionary;
pub mod distance;
pub mod handle;
pub mod index;
pub mod suggestion;

pub use corrector::{Corrector, LinearCorrector, SymDeleteCorrector};
pub use distance::OsaDistance;
pub use handle::{CorrigoHandle, CorrigoOptions, EngineKind};
pub use index::{DeletionEnumerator, SymDeleteIndex};
pub use suggestion::Suggestion;

/// Default maximum edit distance for index construction and queries.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// Default prefix cap for deletion-neighborhood enumeration.
///
/// Words longer than this are truncated to their first
/// `DEFAULT_PREFIX_LENGTH` characters before enumeration, bounding the
/// per-word key count. A value of 0 disables truncation.
pub const DEFAULT_PREFIX_LENGTH: usize = 7;

/// Default number of suggestions returned by a query.
pub const DEFAULT_TOP_K: usize = 3;

/// Error type for dictionary loading and query failures.
#[derive(Debug, thiserror::Error)]
pub enum CorrigoError {
    /// The dictionary file does not exist.
    #[error("dictionary file not found: {}", .0.display())]
    FileMissing(PathBuf),

    /// An I/O error occurred while reading the dictionary.
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),

    /// A dictionary line could not be parsed. Loading is fail-fast: the
    /// first malformed line aborts the build.
    #[error("malformed dictionary line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// A word appeared more than once in the dictionary.
    #[error("duplicate dictionary word: {0}")]
    DuplicateWord(String),

    /// A query requested an edit distance above the index build depth.
    #[error("edit distance {requested} exceeds the index build depth {max}")]
    DistanceOutOfRange { requested: usize, max: usize },

    /// A frequency lookup was made for a word that is not in the dictionary.
    #[error("unknown word: {0}")]
    UnknownWord(String),
}
