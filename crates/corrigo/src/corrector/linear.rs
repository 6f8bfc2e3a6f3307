// Brute-force corrector scanning every dictionary entry.
//
// Same contract and identical output as the symmetric-delete engine, at
// O(dictionary) per query. It is the correctness oracle for the
// differential tests and a sane choice for very small dictionaries where
// the deletion index is not worth its memory.

use hashbrown::HashMap;

use super::{select_top_k, Candidate};
use crate::distance::OsaDistance;
use crate::index::Entry;
use crate::suggestion::Suggestion;
use crate::CorrigoError;

#[derive(Debug)]
pub struct LinearCorrector {
    max_edit_distance: usize,
    entries: Vec<Entry>,
    by_word: HashMap<String, u32>,
    verifier: OsaDistance,
}

impl LinearCorrector {
    pub fn new(max_edit_distance: usize) -> Self {
        Self {
            max_edit_distance,
            entries: Vec::new(),
            by_word: HashMap::new(),
            verifier: OsaDistance::new(),
        }
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    pub fn word_count(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.by_word.contains_key(word)
    }

    pub fn frequency_of(&self, word: &str) -> Result<u64, CorrigoError> {
        self.by_word
            .get(word)
            .map(|&id| self.entries[id as usize].frequency)
            .ok_or_else(|| CorrigoError::UnknownWord(word.to_string()))
    }

    pub fn add_entry(&mut self, word: &str, frequency: u64) -> Result<(), CorrigoError> {
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
        Ok(())
    }

    pub fn find_suggestions(
        &mut self,
        input: &str,
        max_edit_distance: usize,
        top_k: usize,
    ) -> Result<Vec<Suggestion>, CorrigoError> {
        if max_edit_distance > self.max_edit_distance {
            return Err(CorrigoError::DistanceOutOfRange {
                requested: max_edit_distance,
                max: self.max_edit_distance,
            });
        }

        let scan = SuggestionScan {
            entries: self.entries.iter().enumerate(),
            input,
            input_len: input.chars().count(),
            max_edit_distance,
            verifier: &mut self.verifier,
        };
        Ok(select_top_k(scan, top_k))
    }
}

/// Lazy scan over the entry table, yielding verified candidates on demand.
/// The ranker pulls from this; the full candidate list never exists.
struct SuggestionScan<'a> {
    entries: std::iter::Enumerate<std::slice::Iter<'a, Entry>>,
    input: &'a str,
    input_len: usize,
    max_edit_distance: usize,
    verifier: &'a mut OsaDistance,
}

impl Iterator for SuggestionScan<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        loop {
            let (id, entry) = self.entries.next()?;
            if entry.char_len.abs_diff(self.input_len) > self.max_edit_distance {
                continue;
            }
            let d = self
                .verifier
                .distance(self.input, &entry.word, self.max_edit_distance);
            if d < 0 {
                continue;
            }
            return Some(Candidate {
                distance: d as usize,
                frequency: entry.frequency,
                order: id as u32,
                word: entry.word.clone(),
            });
        }
    }
}
