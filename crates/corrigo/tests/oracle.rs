//! Differential tests: compare the symmetric-delete engine against the
//! brute-force linear engine, and both against golden vectors.
//!
//! The linear corrector shares nothing with the index path except the
//! distance kernel and the ranking comparator, so agreement over generated
//! dictionaries and mutated queries exercises candidate generation,
//! deduplication and ranking end to end.

use std::path::PathBuf;

use serde_json::Value;

use corrigo::{
    CorrigoError, CorrigoHandle, CorrigoOptions, EngineKind, OsaDistance, SymDeleteIndex,
    Suggestion,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn golden_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(filename)
}

fn load_golden(filename: &str) -> Value {
    let path = golden_path(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn handle_with(entries: &[(&str, u64)], engine: EngineKind, prefix_length: usize) -> CorrigoHandle {
    CorrigoHandle::from_entries(
        entries.iter().map(|&(w, f)| (w, f)),
        CorrigoOptions {
            max_edit_distance: 2,
            prefix_length,
            engine,
        },
    )
    .expect("dictionary build failed")
}

/// Small deterministic PRNG so query mutation needs no external crate.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'g', 'h', 'i', 'l', 'n', 'o', 'r', 's', 't', 'u',
];

/// Apply one random edit (delete, insert, substitute or adjacent swap).
fn mutate(word: &str, rng: &mut XorShift) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    match rng.below(4) {
        0 if !chars.is_empty() => {
            let i = rng.below(chars.len());
            chars.remove(i);
        }
        1 => {
            let i = rng.below(chars.len() + 1);
            chars.insert(i, ALPHABET[rng.below(ALPHABET.len())]);
        }
        2 if !chars.is_empty() => {
            let i = rng.below(chars.len());
            chars[i] = ALPHABET[rng.below(ALPHABET.len())];
        }
        _ if chars.len() >= 2 => {
            let i = rng.below(chars.len() - 1);
            chars.swap(i, i + 1);
        }
        _ => {}
    }
    chars.into_iter().collect()
}

const WORDS: &[(&str, u64)] = &[
    ("the", 23135851162),
    ("of", 13151942776),
    ("and", 12997637966),
    ("to", 12136980858),
    ("a", 9081174698),
    ("in", 8469404971),
    ("for", 5933321709),
    ("is", 4705743816),
    ("on", 3750423199),
    ("that", 3400031103),
    ("by", 3350048871),
    ("this", 3228469771),
    ("with", 3183110675),
    ("i", 3086225277),
    ("you", 2996181025),
    ("it", 2813163874),
    ("not", 2633487141),
    ("or", 2590739907),
    ("be", 2398724162),
    ("are", 2393614870),
    ("from", 2275595356),
    ("at", 2272272772),
    ("as", 2247431740),
    ("your", 1986369172),
    ("all", 1842818649),
    ("have", 1563505619),
    ("new", 1551258643),
    ("more", 1544771673),
    ("an", 1518266684),
    ("was", 1483428678),
    ("can", 1242323499),
    ("car", 255165297),
    ("cat", 53622007),
    ("cart", 10273628),
    ("bat", 10470537),
    ("bate", 542328),
    ("bats", 2420462),
    ("tea", 35925121),
    ("eat", 49209818),
    ("ate", 7402952),
    ("rate", 224830011),
    ("rats", 4257682),
    ("star", 77674019),
    ("tars", 110385),
    ("arts", 37121539),
    ("sort", 74348874),
    ("sore", 4473646),
    ("core", 46022814),
    ("bore", 2423787),
    ("bone", 13459305),
];

// ---------------------------------------------------------------------------
// Golden vectors
// ---------------------------------------------------------------------------

#[test]
fn golden_distance_vectors() {
    let golden = load_golden("distance.json");
    let cases = golden.as_array().expect("golden root must be an array");
    assert!(!cases.is_empty());

    let mut verifier = OsaDistance::new();
    for case in cases {
        let a = case["a"].as_str().expect("a");
        let b = case["b"].as_str().expect("b");
        let max = case["max"].as_u64().expect("max") as usize;
        let expected = case["expected"].as_i64().expect("expected") as i32;
        assert_eq!(
            verifier.distance(a, b, max),
            expected,
            "distance({a:?}, {b:?}, {max})"
        );
        assert_eq!(
            verifier.distance(b, a, max),
            expected,
            "distance({b:?}, {a:?}, {max})"
        );
    }
}

// ---------------------------------------------------------------------------
// Oracle equivalence
// ---------------------------------------------------------------------------

fn assert_engines_agree(entries: &[(&str, u64)], queries: &[String], prefix_length: usize) {
    let mut sym = handle_with(entries, EngineKind::SymDelete, prefix_length);
    let mut lin = handle_with(entries, EngineKind::Linear, prefix_length);

    for query in queries {
        for max_edit in 0..=2 {
            for top_k in [1, 3, 10] {
                let s = sym.correct_with(query, max_edit, top_k).unwrap();
                let l = lin.correct_with(query, max_edit, top_k).unwrap();
                assert_eq!(
                    s, l,
                    "engines disagree on {query:?} (max {max_edit}, top {top_k})"
                );
            }
        }
    }
}

fn mutated_queries(entries: &[(&str, u64)], per_word: usize, seed: u64) -> Vec<String> {
    let mut rng = XorShift(seed);
    let mut queries: Vec<String> = Vec::new();
    for &(word, _) in entries {
        queries.push(word.to_string());
        for _ in 0..per_word {
            let mut q = word.to_string();
            // One or two stacked edits.
            for _ in 0..=rng.below(2) {
                q = mutate(&q, &mut rng);
            }
            queries.push(q);
        }
    }
    queries.push(String::new());
    queries.push("zzzzzz".to_string());
    queries
}

#[test]
fn symdelete_matches_linear_without_prefix_cap() {
    let queries = mutated_queries(WORDS, 3, 0x9e3779b97f4a7c15);
    assert_engines_agree(WORDS, &queries, 0);
}

#[test]
fn symdelete_matches_linear_with_default_prefix_cap() {
    // All words fit under the cap, so truncation cannot cost recall here.
    let queries = mutated_queries(WORDS, 3, 0x2545f4914f6cdd1d);
    assert_engines_agree(WORDS, &queries, 7);
}

#[test]
fn ranked_output_is_ordered_and_bounded() {
    let mut sym = handle_with(WORDS, EngineKind::SymDelete, 7);
    for query in mutated_queries(WORDS, 2, 0xdeadbeefcafe1234) {
        let out = sym.correct_with(&query, 2, 5).unwrap();
        assert!(out.len() <= 5);
        for pair in out.windows(2) {
            assert!(pair[0].distance <= pair[1].distance, "query {query:?}");
            if pair[0].distance == pair[1].distance {
                assert!(pair[0].frequency >= pair[1].frequency, "query {query:?}");
            }
        }
        for s in &out {
            assert!(s.distance <= 2);
        }
    }
}

#[test]
fn exact_match_query_ranks_itself_first() {
    let mut sym = handle_with(WORDS, EngineKind::SymDelete, 7);
    for &(word, freq) in WORDS {
        let out = sym.correct_with(word, 2, 3).unwrap();
        assert_eq!(out[0], Suggestion::new(word, 0, freq));
    }
}

// ---------------------------------------------------------------------------
// Index recall
// ---------------------------------------------------------------------------

#[test]
fn words_within_distance_share_a_deletion_key() {
    let mut index = SymDeleteIndex::new(2, 0);
    for &(word, freq) in WORDS {
        index.add(word, freq).unwrap();
    }

    let mut verifier = OsaDistance::new();
    for &(u, _) in WORDS {
        let u_id = index.word_id(u).unwrap();
        for &(v, _) in WORDS {
            if u == v || verifier.distance(u, v, 2) < 0 {
                continue;
            }
            let reachable = index
                .enumerator()
                .enumerate(v, 2)
                .iter()
                .filter_map(|key| index.lookup(key))
                .any(|posting| posting.contains(&u_id));
            assert!(reachable, "{u:?} not reachable from {v:?}");
        }
    }
}

// ---------------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------------

fn scenario(
    entries: &[(&str, u64)],
    query: &str,
    max_edit: usize,
    top_k: usize,
    expected: &[(&str, usize, u64)],
) {
    for engine in [EngineKind::SymDelete, EngineKind::Linear] {
        let mut h = handle_with(entries, engine, 7);
        let out = h.correct_with(query, max_edit, top_k).unwrap();
        let expected: Vec<Suggestion> = expected
            .iter()
            .map(|&(w, d, f)| Suggestion::new(w, d, f))
            .collect();
        assert_eq!(out, expected, "query {query:?} on {engine:?}");
    }
}

#[test]
fn scenario_transposed_article() {
    // "they" sits at OSA distance 2 ("teh" -> "the" -> append "y"), so it
    // outranks the lower-frequency distance-2 candidates.
    scenario(
        &[("the", 100), ("they", 50), ("them", 40), ("then", 30)],
        "teh",
        2,
        3,
        &[("the", 1, 100), ("they", 2, 50), ("them", 2, 40)],
    );
}

#[test]
fn scenario_exact_hit_with_neighbors() {
    scenario(
        &[("cat", 10), ("car", 9), ("bat", 8), ("cart", 7)],
        "cat",
        1,
        4,
        &[("cat", 0, 10), ("car", 1, 9), ("bat", 1, 8), ("cart", 1, 7)],
    );
}

#[test]
fn scenario_zero_distance_query() {
    scenario(&[("word", 5)], "word", 0, 3, &[("word", 0, 5)]);
}

#[test]
fn scenario_no_match() {
    scenario(&[("alpha", 1)], "zzzzz", 2, 3, &[]);
}

#[test]
fn scenario_transposition_is_one_edit() {
    scenario(
        &[("ab", 3), ("ba", 2), ("abc", 1)],
        "ab",
        1,
        3,
        &[("ab", 0, 3), ("ba", 1, 2), ("abc", 1, 1)],
    );
}

#[test]
fn scenario_tie_broken_by_insertion_order() {
    scenario(
        &[("a", 1), ("b", 1), ("c", 1)],
        "a",
        2,
        2,
        &[("a", 0, 1), ("b", 1, 1)],
    );
}

// ---------------------------------------------------------------------------
// Dictionary fixtures
// ---------------------------------------------------------------------------

#[test]
fn sample_dictionary_loads_and_corrects() {
    let mut h = CorrigoHandle::from_path(golden_path("sample_dict.txt")).unwrap();
    assert_eq!(h.word_count(), 18);
    assert!(h.key_count() > h.word_count());

    let out = h.correct("speling").unwrap();
    assert_eq!(out[0].word, "spelling");
    assert_eq!(out[0].distance, 1);

    let out = h.correct("inconvient").unwrap();
    assert_eq!(out[0].word, "inconvenient");
    assert_eq!(out[0].distance, 2);
}

#[test]
fn malformed_dictionary_fails_fast_with_line_number() {
    match CorrigoHandle::from_path(golden_path("malformed_dict.txt")) {
        Err(CorrigoError::MalformedLine { line: 3, .. }) => {}
        other => panic!("expected MalformedLine on line 3, got {other:?}"),
    }
}

#[test]
fn missing_dictionary_reports_file_missing() {
    match CorrigoHandle::from_path(golden_path("does_not_exist.txt")) {
        Err(CorrigoError::FileMissing(_)) => {}
        other => panic!("expected FileMissing, got {other:?}"),
    }
}
