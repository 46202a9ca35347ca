use super::*;
use crate::analyzer::types::LineRange;

fn pair(
    file1: &str,
    lines1: (usize, usize),
    file2: &str,
    lines2: (usize, usize),
    similarity: f64,
    code: &str,
) -> DuplicateFinding {
    DuplicateFinding {
        file1: file1.to_string(),
        file2: file2.to_string(),
        lines1: LineRange::new(lines1.0, lines1.1),
        lines2: LineRange::new(lines2.0, lines2.1),
        code: code.to_string(),
        similarity,
        cluster_size: None,
        all_files: None,
        pattern_hash: None,
    }
}

#[test]
fn staggered_windows_collapse_to_one_record() {
    // Three windows of a 12-line shared region, offset by one line each.
    let pairs = vec![
        pair("a.js", (1, 10), "b.js", (5, 14), 1.0, "w0"),
        pair("a.js", (2, 11), "b.js", (6, 15), 1.0, "w1"),
        pair("a.js", (3, 12), "b.js", (7, 16), 1.0, "w2"),
    ];
    let merged = merge_overlaps(pairs);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].lines1, LineRange::new(1, 12));
    assert_eq!(merged[0].lines2, LineRange::new(5, 16));
    assert_eq!(merged[0].code, "w0");
}

#[test]
fn abutting_within_slack_merges() {
    // Gap of two lines on both sides is still mergeable.
    let pairs = vec![
        pair("a.js", (1, 10), "b.js", (1, 10), 0.9, "x"),
        pair("a.js", (12, 21), "b.js", (12, 21), 0.95, "y"),
    ];
    let merged = merge_overlaps(pairs);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].lines1, LineRange::new(1, 21));
    assert_eq!(merged[0].similarity, 0.95);
}

#[test]
fn gap_beyond_slack_stays_split() {
    let pairs = vec![
        pair("a.js", (1, 10), "b.js", (1, 10), 1.0, "x"),
        pair("a.js", (13, 22), "b.js", (13, 22), 1.0, "y"),
    ];
    let merged = merge_overlaps(pairs);
    assert_eq!(merged.len(), 2);
}

#[test]
fn both_sides_must_be_close() {
    // lines1 ranges touch but lines2 ranges are far apart: no merge.
    let pairs = vec![
        pair("a.js", (1, 10), "b.js", (1, 10), 1.0, "x"),
        pair("a.js", (2, 11), "b.js", (90, 99), 1.0, "y"),
    ];
    let merged = merge_overlaps(pairs);
    assert_eq!(merged.len(), 2);
}

#[test]
fn distinct_file_pairs_do_not_interact() {
    let pairs = vec![
        pair("a.js", (1, 10), "b.js", (1, 10), 1.0, "x"),
        pair("a.js", (1, 10), "c.js", (1, 10), 1.0, "y"),
        pair("b.js", (1, 10), "c.js", (1, 10), 1.0, "z"),
    ];
    let merged = merge_overlaps(pairs);
    assert_eq!(merged.len(), 3);
}

#[test]
fn merge_keeps_max_similarity() {
    let pairs = vec![
        pair("a.js", (1, 10), "b.js", (1, 10), 0.87, "x"),
        pair("a.js", (1, 10), "b.js", (2, 11), 0.93, "y"),
        pair("a.js", (2, 11), "b.js", (3, 12), 0.89, "z"),
    ];
    let merged = merge_overlaps(pairs);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].similarity, 0.93);
    assert_eq!(merged[0].code, "x");
}

#[test]
fn unsorted_input_is_sorted_before_merging() {
    let pairs = vec![
        pair("a.js", (12, 21), "b.js", (12, 21), 1.0, "later"),
        pair("a.js", (1, 10), "b.js", (1, 10), 1.0, "earlier"),
        pair("a.js", (11, 20), "b.js", (11, 20), 1.0, "middle"),
    ];
    let merged = merge_overlaps(pairs);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].lines1, LineRange::new(1, 21));
    assert_eq!(merged[0].code, "earlier");
}

#[test]
fn empty_input_empty_output() {
    assert!(merge_overlaps(Vec::new()).is_empty());
}
