use super::*;
use crate::analyzer::normalize::fingerprint;

fn block(file: &str, start: usize, normalized: &str) -> Block {
    Block {
        file: file.to_string(),
        start_line: start,
        end_line: start + 9,
        raw_code: normalized.to_string(),
        normalized_code: normalized.to_string(),
        fingerprint: fingerprint(normalized),
    }
}

const CODE_A: &str = "let a = load(); let b = parse(a); let c = persist(b);";
const CODE_B: &str = "fn render(frame) { frame.clear(); frame.draw(scene); }";

#[test]
fn exact_match_across_two_files() {
    let blocks = vec![block("a.js", 1, CODE_A), block("b.js", 20, CODE_A)];
    let found = find_duplicates(&blocks, 0.85);
    assert_eq!(found.len(), 1);
    let pair = &found[0];
    assert_eq!(pair.similarity, 1.0);
    assert_eq!(pair.file1, "a.js");
    assert_eq!(pair.file2, "b.js");
    assert_eq!(pair.lines1, LineRange::new(1, 10));
    assert_eq!(pair.lines2, LineRange::new(20, 29));
    assert_eq!(pair.code, CODE_A);
}

#[test]
fn identical_blocks_in_same_file_are_ignored() {
    let blocks = vec![block("a.js", 1, CODE_A), block("a.js", 50, CODE_A)];
    assert!(find_duplicates(&blocks, 0.85).is_empty());
}

#[test]
fn unrelated_blocks_produce_nothing() {
    let blocks = vec![block("a.js", 1, CODE_A), block("b.js", 1, CODE_B)];
    assert!(find_duplicates(&blocks, 0.85).is_empty());
}

#[test]
fn fuzzy_match_at_nine_of_ten_tokens() {
    // Ten-token union sharing nine tokens: Jaccard = 0.9.
    let left = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
    let right = "alpha beta gamma delta epsilon zeta eta theta iota";
    let blocks = vec![block("a.js", 1, left), block("b.js", 1, right)];
    let found = find_duplicates(&blocks, 0.85);
    assert_eq!(found.len(), 1);
    assert!((found[0].similarity - 0.9).abs() < 1e-9);
    assert!(found[0].similarity < 1.0);
}

#[test]
fn fuzzy_match_below_threshold_is_dropped() {
    let left = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
    let right = "alpha beta gamma delta epsilon nu xi omicron pi rho";
    let blocks = vec![block("a.js", 1, left), block("b.js", 1, right)];
    assert!(find_duplicates(&blocks, 0.85).is_empty());
}

#[test]
fn reordered_tokens_do_not_count_as_fuzzy_match() {
    // Same token set, different text: Jaccard is exactly 1.0, which pass 2
    // excludes, and the fingerprints differ so pass 1 stays silent.
    let left = "alpha beta gamma delta epsilon zeta";
    let right = "zeta epsilon delta gamma beta alpha";
    let blocks = vec![block("a.js", 1, left), block("b.js", 1, right)];
    assert!(find_duplicates(&blocks, 0.85).is_empty());
}

#[test]
fn duplicate_pair_is_reported_once() {
    // Three copies across two files: the two a.js blocks each pair with
    // b.js, but the a.js-internal pair is skipped.
    let blocks = vec![
        block("a.js", 1, CODE_A),
        block("a.js", 40, CODE_A),
        block("b.js", 1, CODE_A),
    ];
    let found = find_duplicates(&blocks, 0.85);
    assert_eq!(found.len(), 2);
    let mut keys: Vec<String> = found
        .iter()
        .map(|p| format!("{}:{}|{}:{}", p.file1, p.lines1.start, p.file2, p.lines2.start))
        .collect();
    keys.sort();
    assert_eq!(keys, vec!["a.js:1|b.js:1", "a.js:40|b.js:1"]);
}

#[test]
fn three_files_emit_all_cross_pairs() {
    let blocks = vec![
        block("f1.js", 1, CODE_A),
        block("f2.js", 1, CODE_A),
        block("f3.js", 1, CODE_A),
    ];
    let found = find_duplicates(&blocks, 0.85);
    assert_eq!(found.len(), 3);
    assert!(found.iter().all(|p| p.similarity == 1.0));
    assert!(found.iter().all(|p| p.file1 != p.file2));
}

#[test]
fn output_order_is_deterministic() {
    let blocks = vec![
        block("f1.js", 1, CODE_A),
        block("f2.js", 1, CODE_A),
        block("f3.js", 1, CODE_B),
        block("f4.js", 1, CODE_B),
    ];
    let first: Vec<String> = find_duplicates(&blocks, 0.85)
        .iter()
        .map(|p| format!("{}-{}", p.file1, p.file2))
        .collect();
    let second: Vec<String> = find_duplicates(&blocks, 0.85)
        .iter()
        .map(|p| format!("{}-{}", p.file1, p.file2))
        .collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn jaccard_of_disjoint_sets_is_zero() {
    let splitter = regex::Regex::new(r"\s+").unwrap();
    let a = token_set(&splitter, "one two three");
    let b = token_set(&splitter, "four five six");
    assert_eq!(jaccard(&a, &b), 0.0);
}

#[test]
fn jaccard_of_empty_sets_is_zero() {
    let a = HashSet::new();
    let b = HashSet::new();
    assert_eq!(jaccard(&a, &b), 0.0);
}
