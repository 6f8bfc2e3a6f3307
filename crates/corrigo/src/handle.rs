// CorrigoHandle: top-level integration point.
//
// Owns a configured corrector and wires dictionary loading to it. The
// handle is built once from a word/frequency list and then serves queries;
// the underlying index is never mutated by a query. The distance verifier
// inside the corrector reuses scratch buffers, so a handle is a
// one-per-thread object.

use std::path::Path;

use crate::corrector::{Corrector, LinearCorrector, SymDeleteCorrector};
use crate::dictionary;
use crate::suggestion::Suggestion;
use crate::{CorrigoError, DEFAULT_MAX_EDIT_DISTANCE, DEFAULT_PREFIX_LENGTH, DEFAULT_TOP_K};

/// Which correction engine a handle runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// Symmetric-delete index; sub-linear queries, build-time memory cost.
    SymDelete,
    /// Full dictionary scan per query; no index memory.
    Linear,
}

/// Build-time configuration for a handle.
#[derive(Debug, Clone, Copy)]
pub struct CorrigoOptions {
    /// Deletion depth of the index and the maximum queryable edit distance.
    pub max_edit_distance: usize,
    /// Prefix cap for deletion enumeration; 0 disables truncation.
    pub prefix_length: usize,
    pub engine: EngineKind,
}

impl Default for CorrigoOptions {
    fn default() -> Self {
        Self {
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            prefix_length: DEFAULT_PREFIX_LENGTH,
            engine: EngineKind::SymDelete,
        }
    }
}

/// Top-level handle owning the dictionary and a correction engine.
#[derive(Debug)]
pub struct CorrigoHandle {
    corrector: Corrector,
}

impl CorrigoHandle {
    /// Load a dictionary file with default options.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorrigoError> {
        Self::from_path_with(path, CorrigoOptions::default())
    }

    /// Load a dictionary file with explicit options.
    ///
    /// Fail-fast: the first malformed line or duplicate word aborts the
    /// build and the partially built handle is dropped.
    pub fn from_path_with(
        path: impl AsRef<Path>,
        options: CorrigoOptions,
    ) -> Result<Self, CorrigoError> {
        Self::from_entries(dictionary::load_path(path)?, options)
    }

    /// Build a handle from in-memory `(word, frequency)` entries.
    pub fn from_entries<I, S>(entries: I, options: CorrigoOptions) -> Result<Self, CorrigoError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut corrector = match options.engine {
            EngineKind::SymDelete => Corrector::SymDelete(SymDeleteCorrector::new(
                options.max_edit_distance,
                options.prefix_length,
            )),
            EngineKind::Linear => {
                Corrector::Linear(LinearCorrector::new(options.max_edit_distance))
            }
        };
        for (word, frequency) in entries {
            corrector.add_entry(word.as_ref(), frequency)?;
        }
        Ok(Self { corrector })
    }

    /// Number of distinct dictionary words.
    pub fn word_count(&self) -> usize {
        self.corrector.word_count()
    }

    /// Number of distinct deletion keys (0 for the linear engine).
    pub fn key_count(&self) -> usize {
        match &self.corrector {
            Corrector::SymDelete(c) => c.index().key_count(),
            Corrector::Linear(_) => 0,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.corrector.contains(word)
    }

    /// Frequency of a dictionary word; [`CorrigoError::UnknownWord`] if
    /// the word is absent.
    pub fn frequency(&self, word: &str) -> Result<u64, CorrigoError> {
        self.corrector.frequency_of(word)
    }

    /// Maximum edit distance queries may request.
    pub fn max_edit_distance(&self) -> usize {
        self.corrector.max_edit_distance()
    }

    /// Correct `input` with the build depth as the distance threshold and
    /// the default suggestion count.
    pub fn correct(&mut self, input: &str) -> Result<Vec<Suggestion>, CorrigoError> {
        let max = self.corrector.max_edit_distance();
        self.correct_with(input, max, DEFAULT_TOP_K)
    }

    /// Correct `input`: up to `top_k` suggestions within
    /// `max_edit_distance`, ranked by distance, frequency, then dictionary
    /// order. `max_edit_distance` must not exceed the build depth.
    pub fn correct_with(
        &mut self,
        input: &str,
        max_edit_distance: usize,
        top_k: usize,
    ) -> Result<Vec<Suggestion>, CorrigoError> {
        self.corrector
            .find_suggestions(input, max_edit_distance, top_k)
    }
}
