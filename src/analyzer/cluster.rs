//! Transitive pattern clustering.
//!
//! Post-merge pairs that share near-identical raw code are connected
//! components of one underlying copy-paste pattern: pair (A,B) and pair
//! (C,D) belong together whenever their code matches, even though they
//! name four different files. Union-find collapses each component into a
//! single finding that enumerates every affected file and line range.
//!
//! The edge test intentionally compares the raw `code` fields, not the
//! normalized forms; changing this alters which components form.
use std::collections::{HashMap, HashSet};

use regex::Regex;

use super::detect::{jaccard, token_set};
use super::normalize::fingerprint;
use super::types::{DuplicateFinding, FileLocation, LineRange};

/// Disjoint-set forest over pair ordinals, with path compression.
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, x: usize, y: usize) {
        let (px, py) = (self.find(x), self.find(y));
        if px != py {
            self.parent[px] = py;
        }
    }
}

/// Collect each pair's line ranges under its files, preserving the order
/// in which files first appear across the cluster.
fn file_locations(pairs: &[&DuplicateFinding]) -> Vec<(String, Vec<LineRange>)> {
    let mut locations: Vec<(String, Vec<LineRange>)> = Vec::new();
    let mut push = |locations: &mut Vec<(String, Vec<LineRange>)>, file: &str, range: LineRange| {
        match locations.iter_mut().find(|(f, _)| f == file) {
            Some((_, ranges)) => ranges.push(range),
            None => locations.push((file.to_string(), vec![range])),
        }
    };
    for pair in pairs {
        push(&mut locations, &pair.file1, pair.lines1);
        push(&mut locations, &pair.file2, pair.lines2);
    }
    locations
}

/// Merge sorted ranges that overlap or abut within the merger's slack.
fn merge_ranges(mut ranges: Vec<LineRange>) -> Vec<LineRange> {
    ranges.sort_by_key(|r| r.start);
    let mut merged: Vec<LineRange> = Vec::new();
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end + 2 => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}

fn clustered_finding(members: &[&DuplicateFinding]) -> DuplicateFinding {
    let locations = file_locations(members);
    let cluster_size = locations.len();
    let all_files: Vec<FileLocation> = locations
        .into_iter()
        .flat_map(|(file, ranges)| {
            merge_ranges(ranges).into_iter().map(move |lines| FileLocation {
                file: file.clone(),
                lines,
            })
        })
        .collect();

    // Representative: highest similarity, first on ties.
    let representative = members.iter().skip(1).fold(members[0], |best, &pair| {
        if pair.similarity > best.similarity {
            pair
        } else {
            best
        }
    });

    let mut finding = representative.clone();
    finding.pattern_hash = Some(fingerprint(&representative.code));
    finding.cluster_size = Some(cluster_size);
    finding.all_files = Some(all_files);
    finding
}

/// Union pairs whose raw code matches at or above `cluster_threshold`,
/// then collapse each component into one finding. The result carries the
/// final report order: cluster size descending, similarity descending.
pub fn cluster_patterns(
    pairs: Vec<DuplicateFinding>,
    cluster_threshold: f64,
) -> Vec<DuplicateFinding> {
    let splitter = Regex::new(r"\s+").unwrap();
    let tokens: Vec<HashSet<&str>> = pairs
        .iter()
        .map(|p| token_set(&splitter, &p.code))
        .collect();

    let mut forest = UnionFind::new(pairs.len());
    for i in 0..pairs.len() {
        for j in (i + 1)..pairs.len() {
            if jaccard(&tokens[i], &tokens[j]) >= cluster_threshold {
                forest.union(i, j);
            }
        }
    }

    let mut components: HashMap<usize, Vec<usize>> = HashMap::new();
    for idx in 0..pairs.len() {
        components.entry(forest.find(idx)).or_default().push(idx);
    }
    let mut clusters: Vec<Vec<usize>> = components.into_values().collect();
    clusters.sort_by_key(|members| members[0]);

    let mut findings: Vec<DuplicateFinding> = clusters
        .into_iter()
        .map(|members| {
            if members.len() == 1 {
                pairs[members[0]].clone()
            } else {
                let refs: Vec<&DuplicateFinding> = members.iter().map(|&i| &pairs[i]).collect();
                clustered_finding(&refs)
            }
        })
        .collect();

    findings.sort_by(|a, b| {
        let size_a = a.cluster_size.unwrap_or(1);
        let size_b = b.cluster_size.unwrap_or(1);
        size_b.cmp(&size_a).then_with(|| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });
    findings
}

#[cfg(test)]
#[path = "cluster_test.rs"]
mod tests;
