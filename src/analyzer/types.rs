//! Data model for the duplication analyzer.
//!
//! Input descriptors arrive in the camelCase wire convention used by the
//! surrounding review service; the report serializes back out with the exact
//! field names the display layer keys on (`clusterSize`, `allFiles`,
//! `patternHash` distinguish clustered findings from pairwise ones).
use serde::{Deserialize, Serialize};

/// A file changed by a pull request, as supplied by the upstream change
/// fetcher. Borrowed for the duration of analysis; the analyzer copies out
/// only the substrings it needs.
#[derive(Debug, Clone, Deserialize)]
pub struct FileDescriptor {
    pub filename: String,
    /// Change kind tag ("added", "modified", "removed", ...).
    pub status: String,
    /// Lines added by the change, per the upstream diff stat.
    #[serde(default)]
    pub additions: usize,
    /// Lines removed by the change, per the upstream diff stat.
    #[serde(default)]
    pub deletions: usize,
    /// Unified-diff patch text; absent for binary or oversized deltas.
    #[serde(default)]
    pub patch: Option<String>,
}

/// Inclusive 1-based line range in the post-image of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// One location of a clustered pattern: a file plus a merged line range.
#[derive(Debug, Clone, Serialize)]
pub struct FileLocation {
    pub file: String,
    pub lines: LineRange,
}

/// A duplicated fragment shared by two files, optionally promoted to a
/// cluster covering further locations.
///
/// The cluster fields are `None` for plain pairwise findings and are omitted
/// from serialized output entirely, so consumers can use their presence as
/// the clustered/pairwise discriminator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateFinding {
    pub file1: String,
    pub file2: String,
    pub lines1: LineRange,
    pub lines2: LineRange,
    /// Raw code of the first source block of the pair.
    pub code: String,
    /// Similarity in [0, 1]; exactly 1.0 for fingerprint matches.
    pub similarity: f64,
    /// Number of distinct files the pattern appears in (clusters only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_size: Option<usize>,
    /// Every location of the pattern, one entry per merged range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_files: Option<Vec<FileLocation>>,
    /// Content hash of the representative block's raw code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_hash: Option<String>,
}

/// Report-level severity tier derived from the duplication percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Uppercase label for terminal reports.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        }
    }
}

/// Final output of the analyzer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicationReport {
    /// Duplicated share of added lines, rounded to one decimal.
    pub percentage: f64,
    pub severity: Severity,
    /// Findings sorted by cluster size descending, then similarity descending.
    pub duplicate_blocks: Vec<DuplicateFinding>,
    /// Sum of `additions` over every file that passed the skip filter.
    pub total_lines: usize,
    /// Count of distinct duplicated lines across finding endpoints.
    pub duplicated_lines: usize,
}

impl DuplicationReport {
    /// The degraded result returned when analysis fails or input is empty.
    pub fn empty() -> Self {
        Self {
            percentage: 0.0,
            severity: Severity::Low,
            duplicate_blocks: Vec::new(),
            total_lines: 0,
            duplicated_lines: 0,
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
