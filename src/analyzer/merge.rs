//! Overlap coalescing of pairwise findings.
//!
//! The sliding-window extractor reports a long shared region as a pile of
//! staggered pairs. Within each unordered file pair, records whose ranges
//! overlap or sit within two lines of each other on both sides collapse
//! into one consolidated record covering the whole region. The two-line
//! slack absorbs the window's natural self-overlap plus a single
//! intervening line.
use std::collections::HashMap;

use super::types::DuplicateFinding;

/// Lines of slack allowed between mergeable ranges.
const MERGE_SLACK: usize = 2;

/// Canonical key for an unordered file pair.
fn file_pair_key(pair: &DuplicateFinding) -> String {
    if pair.file1 <= pair.file2 {
        format!("{}|{}", pair.file1, pair.file2)
    } else {
        format!("{}|{}", pair.file2, pair.file1)
    }
}

fn absorb(current: &mut DuplicateFinding, next: &DuplicateFinding) {
    current.lines1.start = current.lines1.start.min(next.lines1.start);
    current.lines1.end = current.lines1.end.max(next.lines1.end);
    current.lines2.start = current.lines2.start.min(next.lines2.start);
    current.lines2.end = current.lines2.end.max(next.lines2.end);
    current.similarity = current.similarity.max(next.similarity);
    // file1, file2, and code stay with the first record of the run.
}

/// Merge overlapping or abutting records within each file pair.
pub fn merge_overlaps(pairs: Vec<DuplicateFinding>) -> Vec<DuplicateFinding> {
    let mut partitions: HashMap<String, Vec<DuplicateFinding>> = HashMap::new();
    for pair in pairs {
        partitions.entry(file_pair_key(&pair)).or_default().push(pair);
    }

    let mut keys: Vec<&String> = partitions.keys().collect();
    keys.sort();
    let keys: Vec<String> = keys.into_iter().cloned().collect();

    let mut merged = Vec::new();
    for key in keys {
        let mut group = partitions.remove(&key).unwrap_or_default();
        group.sort_by_key(|p| p.lines1.start);

        let mut iter = group.into_iter();
        let Some(mut current) = iter.next() else {
            continue;
        };
        for next in iter {
            if next.lines1.start <= current.lines1.end + MERGE_SLACK
                && next.lines2.start <= current.lines2.end + MERGE_SLACK
            {
                absorb(&mut current, &next);
            } else {
                merged.push(current);
                current = next;
            }
        }
        merged.push(current);
    }

    merged
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod tests;
