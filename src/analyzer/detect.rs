//! Pairwise duplicate detection.
//!
//! Two passes over the candidate blocks. Pass 1 buckets blocks by
//! fingerprint; every cross-file pair inside a bucket is an exact match at
//! similarity 1.0. Pass 2 runs all-pairs Jaccard similarity over the
//! normalized token sets and keeps pairs at or above the threshold but
//! strictly below 1.0, so exact matches are not double-counted. Both passes
//! share one dedup-key set: an unordered pair of `file:start-end` endpoints
//! is reported at most once.
use std::collections::{HashMap, HashSet};

use regex::Regex;

use super::blocks::Block;
use super::types::{DuplicateFinding, LineRange};

/// Dedup key for an unordered block pair: the two `file:start-end`
/// endpoints sorted lexicographically and joined with `|`.
fn pair_key(a: &Block, b: &Block) -> String {
    let ka = format!("{}:{}-{}", a.file, a.start_line, a.end_line);
    let kb = format!("{}:{}-{}", b.file, b.start_line, b.end_line);
    if ka <= kb {
        format!("{ka}|{kb}")
    } else {
        format!("{kb}|{ka}")
    }
}

/// Split on whitespace runs, keeping empty fragments as-is.
pub(crate) fn token_set<'a>(splitter: &Regex, text: &'a str) -> HashSet<&'a str> {
    splitter.split(text).collect()
}

/// Jaccard similarity of two token sets; 0 when the union is empty.
pub(crate) fn jaccard<'a>(a: &HashSet<&'a str>, b: &HashSet<&'a str>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

fn pairwise(a: &Block, b: &Block, similarity: f64) -> DuplicateFinding {
    DuplicateFinding {
        file1: a.file.clone(),
        file2: b.file.clone(),
        lines1: LineRange::new(a.start_line, a.end_line),
        lines2: LineRange::new(b.start_line, b.end_line),
        code: a.raw_code.clone(),
        similarity,
        cluster_size: None,
        all_files: None,
        pattern_hash: None,
    }
}

/// Find every cross-file duplicate pair among `blocks`.
///
/// Blocks with identical content inside a single file are ignored: the
/// sliding window already overlaps itself there and would flood the output.
pub fn find_duplicates(blocks: &[Block], similarity_threshold: f64) -> Vec<DuplicateFinding> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut found: Vec<DuplicateFinding> = Vec::new();

    // Pass 1: exact matches through fingerprint buckets. Bucket keys are
    // sorted so output order is a pure function of input order.
    let mut buckets: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, block) in blocks.iter().enumerate() {
        buckets.entry(&block.fingerprint).or_default().push(idx);
    }
    let mut keys: Vec<&str> = buckets
        .iter()
        .filter(|(_, members)| members.len() >= 2)
        .map(|(key, _)| *key)
        .collect();
    keys.sort();
    for key in keys {
        let members = &buckets[key];
        for (pos, &i) in members.iter().enumerate() {
            for &j in &members[pos + 1..] {
                if blocks[i].file == blocks[j].file {
                    continue;
                }
                let dedup = pair_key(&blocks[i], &blocks[j]);
                if !seen.insert(dedup) {
                    continue;
                }
                found.push(pairwise(&blocks[i], &blocks[j], 1.0));
            }
        }
    }

    // Pass 2: fuzzy matches below 1.0 via all-pairs Jaccard on normalized
    // tokens.
    let splitter = Regex::new(r"\s+").unwrap();
    let tokens: Vec<HashSet<&str>> = blocks
        .iter()
        .map(|b| token_set(&splitter, &b.normalized_code))
        .collect();

    for i in 0..blocks.len() {
        for j in (i + 1)..blocks.len() {
            if blocks[i].file == blocks[j].file {
                continue;
            }
            let similarity = jaccard(&tokens[i], &tokens[j]);
            if similarity < similarity_threshold || similarity >= 1.0 {
                continue;
            }
            let dedup = pair_key(&blocks[i], &blocks[j]);
            if !seen.insert(dedup) {
                continue;
            }
            found.push(pairwise(&blocks[i], &blocks[j], similarity));
        }
    }

    found
}

#[cfg(test)]
#[path = "detect_test.rs"]
mod tests;
