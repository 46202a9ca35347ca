//! Duplication analysis over a pull request's changed files.
//!
//! The analyzer is a pure function from patch-annotated file descriptors to
//! a `DuplicationReport`. Six stages run in order: parse each patch into
//! added lines, slide fixed windows over them, normalize and fingerprint
//! every window, detect exact and fuzzy cross-file pairs, coalesce
//! overlapping pairs, and cluster transitively-matching pairs into
//! multi-file findings. Aggregate metrics (total added lines, duplicated
//! lines, percentage, severity) close out the report.
//!
//! Analysis is best-effort by contract: any internal failure is logged and
//! degrades to the empty report, never to an error. Duplication findings
//! are auxiliary to the surrounding review and must not block it.
pub(crate) mod blocks;
pub(crate) mod cluster;
pub(crate) mod detect;
pub(crate) mod merge;
pub(crate) mod normalize;
pub(crate) mod patch;
pub mod report;
pub mod types;

use std::collections::HashSet;
use std::error::Error;

use log::error;
use regex::RegexSet;

use crate::config::AnalyzerConfig;
use blocks::{Block, BlockExtractor};
use normalize::Normalizer;
use patch::PatchParser;
use types::{DuplicationReport, FileDescriptor, Severity};

/// Filename patterns excluded from analysis: lockfiles, docs, data,
/// minified bundles, tests, and generated output directories.
pub struct SkipFilter {
    patterns: RegexSet,
}

impl SkipFilter {
    pub fn new() -> Self {
        Self {
            patterns: RegexSet::new([
                r"\.json$",
                r"\.md$",
                r"\.txt$",
                r"\.yaml$",
                r"\.yml$",
                r"\.lock$",
                r"package-lock\.json$",
                r"yarn\.lock$",
                r"\.min\.js$",
                r"\.test\.",
                r"\.spec\.",
                r"/__tests__/",
                r"/node_modules/",
                r"/dist/",
                r"/build/",
            ])
            .unwrap(),
        }
    }

    pub fn matches(&self, filename: &str) -> bool {
        self.patterns.is_match(filename)
    }
}

impl Default for SkipFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze the changed files of a pull request.
///
/// Total over its input: failures are logged and collapse to the empty
/// report rather than propagating.
pub fn analyze(files: &[FileDescriptor], config: &AnalyzerConfig) -> DuplicationReport {
    match analyze_inner(files, config) {
        Ok(report) => report,
        Err(err) => {
            error!("duplication analysis failed: {err}");
            DuplicationReport::empty()
        }
    }
}

/// Analyze a change set and print the report in the selected output mode.
pub fn run(
    files: &[FileDescriptor],
    config: &AnalyzerConfig,
    show_report: bool,
    show_all: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let report = analyze(files, config);
    if json {
        report::print_json(&report)?;
    } else if show_report {
        report::print_detailed(&report, show_all);
    } else {
        report::print_summary(&report);
    }
    Ok(())
}

fn analyze_inner(
    files: &[FileDescriptor],
    config: &AnalyzerConfig,
) -> Result<DuplicationReport, Box<dyn Error>> {
    let skip = SkipFilter::new();
    let kept: Vec<&FileDescriptor> = files
        .iter()
        .filter(|f| !skip.matches(&f.filename))
        .collect();

    let total_lines: usize = kept.iter().map(|f| f.additions).sum();

    let parser = PatchParser::new();
    let normalizer = Normalizer::new();
    let extractor = BlockExtractor::new(config.min_block_size);

    let mut candidates: Vec<Block> = Vec::new();
    for file in &kept {
        let Some(patch) = &file.patch else {
            continue;
        };
        let lines = parser.added_lines(patch);
        if lines.len() < config.min_block_size {
            continue;
        }
        extractor.extract(&file.filename, &lines, &normalizer, &mut candidates);
    }

    let pairs = detect::find_duplicates(&candidates, config.similarity_threshold);
    let merged = merge::merge_overlaps(pairs);
    let findings = cluster::cluster_patterns(merged, config.cluster_similarity_threshold);

    let duplicated_lines = count_duplicated_lines(&findings);
    let percentage = if total_lines > 0 {
        round1(100.0 * duplicated_lines as f64 / total_lines as f64)
    } else {
        0.0
    };

    Ok(DuplicationReport {
        percentage,
        severity: severity_for(percentage, config),
        duplicate_blocks: findings,
        total_lines,
        duplicated_lines,
    })
}

/// Count distinct `file:line` positions covered by the findings' pair
/// endpoints. Cluster `allFiles` locations do not contribute;
/// only the representative pair's two sides are counted.
fn count_duplicated_lines(findings: &[types::DuplicateFinding]) -> usize {
    let mut lines: HashSet<String> = HashSet::new();
    for finding in findings {
        for n in finding.lines1.start..=finding.lines1.end {
            lines.insert(format!("{}:{n}", finding.file1));
        }
        for n in finding.lines2.start..=finding.lines2.end {
            lines.insert(format!("{}:{n}", finding.file2));
        }
    }
    lines.len()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn severity_for(percentage: f64, config: &AnalyzerConfig) -> Severity {
    if percentage >= config.high_percent {
        Severity::High
    } else if percentage >= config.medium_percent {
        Severity::Medium
    } else {
        Severity::Low
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
