// Symmetric-delete corrector.
//
// Query path: enumerate the input's deletion neighborhood at the query
// depth, union the posting lists behind those keys, then verify each
// distinct candidate with the bounded distance kernel. The candidate set is
// small and independent of dictionary size; the verifier rejects the
// neighborhood over-approximation.

use hashbrown::HashSet;

use super::{select_top_k, Candidate};
use crate::distance::OsaDistance;
use crate::index::SymDeleteIndex;
use crate::suggestion::Suggestion;
use crate::CorrigoError;

#[derive(Debug)]
pub struct SymDeleteCorrector {
    index: SymDeleteIndex,
    verifier: OsaDistance,
}

impl SymDeleteCorrector {
    pub fn new(max_edit_distance: usize, prefix_length: usize) -> Self {
        Self {
            index: SymDeleteIndex::new(max_edit_distance, prefix_length),
            verifier: OsaDistance::new(),
        }
    }

    pub fn index(&self) -> &SymDeleteIndex {
        &self.index
    }

    pub fn add_entry(&mut self, word: &str, frequency: u64) -> Result<(), CorrigoError> {
        self.index.add(word, frequency)
    }

    pub fn find_suggestions(
        &mut self,
        input: &str,
        max_edit_distance: usize,
        top_k: usize,
    ) -> Result<Vec<Suggestion>, CorrigoError> {
        if max_edit_distance > self.index.max_edit_distance() {
            return Err(CorrigoError::DistanceOutOfRange {
                requested: max_edit_distance,
                max: self.index.max_edit_distance(),
            });
        }

        let input_len = input.chars().count();
        let mut seen: HashSet<u32> = HashSet::new();
        let mut candidates: Vec<Candidate> = Vec::new();

        if let Some(id) = self.index.word_id(input) {
            seen.insert(id);
            let entry = self.index.entry(id);
            candidates.push(Candidate {
                distance: 0,
                frequency: entry.frequency,
                order: id,
                word: entry.word.clone(),
            });
        }

        if max_edit_distance > 0 {
            let keys = self
                .index
                .enumerator()
                .enumerate(input, max_edit_distance);
            for key in &keys {
                let Some(posting) = self.index.lookup(key) else {
                    continue;
                };
                for &id in posting {
                    if !seen.insert(id) {
                        continue;
                    }
                    let entry = self.index.entry(id);
                    if entry.char_len.abs_diff(input_len) > max_edit_distance {
                        continue;
                    }
                    let d = self
                        .verifier
                        .distance(input, &entry.word, max_edit_distance);
                    if d < 0 {
                        continue;
                    }
                    candidates.push(Candidate {
                        distance: d as usize,
                        frequency: entry.frequency,
                        order: id,
                        word: entry.word.clone(),
                    });
                }
            }
        }

        Ok(select_top_k(candidates.into_iter(), top_k))
    }
}
