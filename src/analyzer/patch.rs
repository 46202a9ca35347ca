//! Unified-diff patch parsing.
//!
//! Recovers the post-image line numbers and text of added lines only. The
//! parser walks the patch line by line keeping a cursor into the post-image:
//! hunk headers reset it, additions and context advance it, deletions do not.
//! It is tolerant of damage: a malformed hunk header leaves the cursor
//! where it was, and whatever added lines can still be identified are kept.
use regex::Regex;

/// A line added by the patch: 1-based post-image line number plus the raw
/// text with the leading `+` stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedLine {
    pub line_number: usize,
    pub content: String,
}

/// Line-oriented unified-diff reader.
pub struct PatchParser {
    hunk_start: Regex,
}

impl PatchParser {
    pub fn new() -> Self {
        Self {
            // First "+N" in a hunk header locates the post-image start.
            hunk_start: Regex::new(r"\+(\d+)").unwrap(),
        }
    }

    /// Extract the added lines of a unified-diff patch in order.
    pub fn added_lines(&self, patch: &str) -> Vec<AddedLine> {
        let mut added = Vec::new();
        let mut current_line: usize = 0;

        for line in patch.lines() {
            if line.starts_with("@@") {
                if let Some(n) = self.post_image_start(line) {
                    current_line = n;
                }
                // Malformed header: cursor unchanged, keep going.
            } else if line.starts_with('+') && !line.starts_with("+++") {
                added.push(AddedLine {
                    line_number: current_line,
                    content: line[1..].to_string(),
                });
                current_line += 1;
            } else if line.starts_with('-') && !line.starts_with("---") {
                // Deletion: pre-image only, the post-image cursor stays put.
            } else {
                current_line += 1;
            }
        }

        added
    }

    /// Parse the `+N` of a `@@ -a,b +N,M @@` header.
    fn post_image_start(&self, header: &str) -> Option<usize> {
        self.hunk_start
            .captures(header)
            .and_then(|caps| caps[1].parse().ok())
    }
}

impl Default for PatchParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "patch_test.rs"]
mod tests;
