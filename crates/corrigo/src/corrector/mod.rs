// Correction strategies.
//
// Two engines share one contract: `add_entry` during the build phase,
// `find_suggestions` during the query phase. The symmetric-delete engine is
// the production path; the linear engine scans the whole dictionary and
// exists as the slow, obviously-correct reference the differential tests
// compare against. Both produce bit-identical ranked output.

pub mod linear;
pub mod symdelete;

pub use linear::LinearCorrector;
pub use symdelete::SymDeleteCorrector;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::suggestion::Suggestion;
use crate::CorrigoError;

/// A correction engine.
///
/// Deliberately a tagged variant rather than a trait object: there are
/// exactly two strategies and callers sometimes need to reach the concrete
/// engine (the differential tests do).
#[derive(Debug)]
pub enum Corrector {
    Linear(LinearCorrector),
    SymDelete(SymDeleteCorrector),
}

impl Corrector {
    /// Insert a dictionary word. Fails with
    /// [`CorrigoError::DuplicateWord`] on repeated words.
    pub fn add_entry(&mut self, word: &str, frequency: u64) -> Result<(), CorrigoError> {
        match self {
            Corrector::Linear(c) => c.add_entry(word, frequency),
            Corrector::SymDelete(c) => c.add_entry(word, frequency),
        }
    }

    /// Ranked suggestions for `input`: up to `top_k` dictionary words within
    /// `max_edit_distance`, ordered by distance, then frequency, then
    /// dictionary insertion order.
    pub fn find_suggestions(
        &mut self,
        input: &str,
        max_edit_distance: usize,
        top_k: usize,
    ) -> Result<Vec<Suggestion>, CorrigoError> {
        match self {
            Corrector::Linear(c) => c.find_suggestions(input, max_edit_distance, top_k),
            Corrector::SymDelete(c) => c.find_suggestions(input, max_edit_distance, top_k),
        }
    }

    pub fn word_count(&self) -> usize {
        match self {
            Corrector::Linear(c) => c.word_count(),
            Corrector::SymDelete(c) => c.index().word_count(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        match self {
            Corrector::Linear(c) => c.contains(word),
            Corrector::SymDelete(c) => c.index().contains(word),
        }
    }

    pub fn frequency_of(&self, word: &str) -> Result<u64, CorrigoError> {
        match self {
            Corrector::Linear(c) => c.frequency_of(word),
            Corrector::SymDelete(c) => c.index().frequency_of(word),
        }
    }

    /// Upper bound for query edit distances.
    pub fn max_edit_distance(&self) -> usize {
        match self {
            Corrector::Linear(c) => c.max_edit_distance(),
            Corrector::SymDelete(c) => c.index().max_edit_distance(),
        }
    }
}

/// A verified candidate before top-K selection.
///
/// The ordering is total: distance ascending, frequency descending, then
/// dictionary insertion order. `Ord` ranks better candidates as `Less`, so
/// a max-heap of candidates keeps its worst element on top.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub distance: usize,
    pub frequency: u64,
    pub order: u32,
    pub word: String,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.frequency.cmp(&self.frequency))
            .then_with(|| self.order.cmp(&other.order))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Keep the `top_k` best candidates from a stream.
///
/// The heap is bounded at `top_k + 1`: push, then drop the worst past
/// capacity. The stream is consumed on demand and never materialised.
pub(crate) fn select_top_k(
    candidates: impl Iterator<Item = Candidate>,
    top_k: usize,
) -> Vec<Suggestion> {
    if top_k == 0 {
        return Vec::new();
    }
    let mut heap = BinaryHeap::with_capacity(top_k + 1);
    for candidate in candidates {
        heap.push(candidate);
        if heap.len() > top_k {
            heap.pop();
        }
    }
    heap.into_sorted_vec()
        .into_iter()
        .map(|c| Suggestion {
            word: c.word,
            distance: c.distance,
            frequency: c.frequency,
        })
        .collect()
}
