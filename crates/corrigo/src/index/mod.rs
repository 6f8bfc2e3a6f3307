// Symmetric-delete index.
//
// Every dictionary word is registered under each string obtainable from it
// by up to `max_edit_distance` deletions. Two words within edit distance d
// of each other always share at least one such key, so a query only has to
// examine the posting lists of its own deletion neighborhood instead of the
// whole dictionary. Posting lists over-approximate: shared keys prove at
// most 2d deletions between the words, and the distance verifier makes the
// final call.
//
// Keys are the exact edit strings, so posting membership is decided by
// string equality and candidates carry no structural false positives.

pub mod enumerator;

pub use enumerator::DeletionEnumerator;

use hashbrown::HashMap;

use crate::CorrigoError;

/// One dictionary word with its precomputed character length.
#[derive(Debug, Clone)]
pub struct Entry {
    pub word: String,
    pub char_len: usize,
    pub frequency: u64,
}

/// Maps deletion keys to the words that generate them.
///
/// Entries are insertion-ordered and identified by a dense `u32` id;
/// posting lists store ids rather than owned strings. The id doubles as the
/// final ranking tie-breaker, which keeps query results fully deterministic.
///
/// The index is append-only while the dictionary is loaded and is treated
/// as read-only afterwards; there is no removal or update.
#[derive(Debug)]
pub struct SymDeleteIndex {
    max_edit_distance: usize,
    enumerator: DeletionEnumerator,
    entries: Vec<Entry>,
    by_word: HashMap<String, u32>,
    postings: HashMap<String, Vec<u32>>,
}

impl SymDeleteIndex {
    pub fn new(max_edit_distance: usize, prefix_length: usize) -> Self {
        Self {
            max_edit_distance,
            enumerator: DeletionEnumerator::new(prefix_length),
            entries: Vec::new(),
            by_word: HashMap::new(),
            postings: HashMap::new(),
        }
    }

    /// Build depth: the deletion depth keys were generated with, and the
    /// upper bound for query edit distances.
    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    pub fn enumerator(&self) -> &DeletionEnumerator {
        &self.enumerator
    }

    /// Insert a word with its frequency.
    ///
    /// Fails with [`CorrigoError::DuplicateWord`] if the word is already
    /// present; the word is registered under every key of its deletion
    /// neighborhood at the build depth. A word never lands in the same
    /// posting list twice because the neighborhood itself is a set.
    pub fn add(&mut self, word: &str, frequency: u64) -> Result<(), CorrigoError> {
        if self.by_word.contains_key(word) {
            return Err(CorrigoError::DuplicateWord(word.to_string()));
        }

        let id = self.entries.len() as u32;
        self.entries.push(Entry {
            word: word.to_string(),
            char_len: word.chars().count(),
            frequency,
        });
        self.by_word.insert(word.to_string(), id);

        for key in self.enumerator.enumerate(word, self.max_edit_distance) {
            self.postings.entry(key).or_default().push(id);
        }
        Ok(())
    }

    /// Posting list for a deletion key, if any word generates it.
    pub fn lookup(&self, key: &str) -> Option<&[u32]> {
        self.postings.get(key).map(Vec::as_slice)
    }

    /// Frequency of a dictionary word.
    pub fn frequency_of(&self, word: &str) -> Result<u64, CorrigoError> {
        self.by_word
            .get(word)
            .map(|&id| self.entries[id as usize].frequency)
            .ok_or_else(|| CorrigoError::UnknownWord(word.to_string()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.by_word.contains_key(word)
    }

    pub fn word_id(&self, word: &str) -> Option<u32> {
        self.by_word.get(word).copied()
    }

    pub fn entry(&self, id: u32) -> &Entry {
        &self.entries[id as usize]
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of distinct deletion keys.
    pub fn key_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.entries.len()
    }
}
