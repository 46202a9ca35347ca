//! Report formatters for duplication findings.
//!
//! Provides three output modes:
//! - **Summary**: compact overview with added/duplicated line counts,
//!   duplication percentage, and severity tier.
//! - **Detailed**: summary plus a listing of each finding with both
//!   locations, cluster membership when present, and a code sample
//!   (up to 5 lines).
//! - **JSON**: the wire-format report, pretty-printed. Field names are a
//!   stable contract with the review service's display layer.
use std::error::Error;

use super::types::{DuplicateFinding, DuplicationReport};
use crate::report_helpers;

/// Maximum findings shown by default (use `--show-all` to override).
pub const DEFAULT_FINDING_LIMIT: usize = 20;

/// Compute how many findings to display based on the `--show-all` flag.
pub fn display_limit(total: usize, show_all: bool) -> usize {
    if show_all {
        total
    } else {
        DEFAULT_FINDING_LIMIT.min(total)
    }
}

/// Count findings that carry cluster information.
fn cluster_count(findings: &[DuplicateFinding]) -> usize {
    findings.iter().filter(|f| f.cluster_size.is_some()).count()
}

/// Print a summary of the duplication report.
pub fn print_summary(report: &DuplicationReport) {
    let separator = report_helpers::separator(68);

    println!("{separator}");
    println!(" Duplication Analysis");
    println!();
    println!(" Added lines analyzed: {:>42}", report.total_lines);
    println!(" Duplicated lines:     {:>42}", report.duplicated_lines);
    println!(" Duplication:          {:>41.1}%", report.percentage);
    println!();
    println!(
        " Findings:             {:>42}",
        report.duplicate_blocks.len()
    );
    let clusters = cluster_count(&report.duplicate_blocks);
    if clusters > 0 {
        println!(" Multi-file clusters:  {:>42}", clusters);
    }
    println!();
    println!(" Severity:             {:>42}", report.severity.label());
    println!("{separator}");
}

fn print_finding(index: usize, finding: &DuplicateFinding) {
    let similarity_pct = finding.similarity * 100.0;
    match finding.cluster_size {
        Some(size) => println!(
            " [{}] CLUSTER across {} files ({:.0}% similar)",
            index + 1,
            size,
            similarity_pct
        ),
        None => println!(" [{}] PAIR ({:.0}% similar)", index + 1, similarity_pct),
    }
    println!();
    println!(
        "   {}:{}-{}",
        finding.file1, finding.lines1.start, finding.lines1.end
    );
    println!(
        "   {}:{}-{}",
        finding.file2, finding.lines2.start, finding.lines2.end
    );
    if let Some(all_files) = &finding.all_files {
        println!();
        println!(" All locations:");
        for location in all_files {
            println!(
                "   {}:{}-{}",
                location.file, location.lines.start, location.lines.end
            );
        }
    }
    if let Some(hash) = &finding.pattern_hash {
        println!();
        println!(" Pattern: {hash}");
    }

    let sample: Vec<&str> = finding.code.lines().take(5).collect();
    if !sample.is_empty() {
        println!();
        println!(" Sample:");
        for line in &sample {
            println!("   {line}");
        }
        if finding.code.lines().count() > sample.len() {
            println!("   ...");
        }
    }
}

/// Print the summary followed by a detailed listing of each finding.
pub fn print_detailed(report: &DuplicationReport, show_all: bool) {
    print_summary(report);

    if report.duplicate_blocks.is_empty() {
        return;
    }

    let separator = report_helpers::separator(68);
    let limit = display_limit(report.duplicate_blocks.len(), show_all);

    println!();
    println!(" Findings (sorted by cluster size, then similarity)");

    for (i, finding) in report.duplicate_blocks[..limit].iter().enumerate() {
        println!();
        println!("{separator}");
        print_finding(i, finding);
    }

    println!("{separator}");

    if limit < report.duplicate_blocks.len() {
        println!();
        println!(
            " Showing top {} of {} findings.",
            limit,
            report.duplicate_blocks.len()
        );
        println!(" Use --show-all to see all findings.");
    }
}

/// Serialize the report to pretty-printed JSON.
pub fn format_json(report: &DuplicationReport) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Print the report as pretty-printed JSON to stdout.
pub fn print_json(report: &DuplicationReport) -> Result<(), Box<dyn Error>> {
    println!("{}", format_json(report)?);
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
