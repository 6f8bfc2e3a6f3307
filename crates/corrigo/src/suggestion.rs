// Suggestion value type returned by queries.

/// A ranked correction candidate.
///
/// `distance` is the optimal-string-alignment distance from the query to
/// `word` and never exceeds the edit-distance threshold the query ran with.
/// `frequency` is the corpus frequency recorded in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The suggested dictionary word.
    pub word: String,
    /// Edit distance from the query to `word`.
    pub distance: usize,
    /// Corpus frequency of `word`.
    pub frequency: u64,
}

impl Suggestion {
    pub fn new(word: impl Into<String>, distance: usize, frequency: u64) -> Self {
        Self {
            word: word.into(),
            distance,
            frequency,
        }
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} - {}", self.word, self.distance, self.frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_dash_separated_triple() {
        let s = Suggestion::new("the", 1, 100);
        assert_eq!(s.to_string(), "the - 1 - 100");
    }
}
