//! Candidate block extraction.
//!
//! Slides a fixed-size window over a file's added lines and emits one
//! `Block` per offset, so every run of `min_block_size` consecutive added
//! lines becomes a candidate. Windows may straddle context gaps: the line
//! numbers keep the original post-image positions, which is acceptable for
//! locating clusters. A triviality filter drops windows that cannot
//! represent meaningful duplication (near-empty normalizations, markup
//! attribute runs, import/export preambles, lone braces).
use regex::Regex;

use super::normalize::{Normalizer, fingerprint};
use super::patch::AddedLine;

/// A windowed candidate block with its normalized form and fingerprint.
#[derive(Debug, Clone)]
pub struct Block {
    pub file: String,
    pub start_line: usize,
    pub end_line: usize,
    pub raw_code: String,
    pub normalized_code: String,
    pub fingerprint: String,
}

/// Minimum normalized length for a block to be worth comparing.
const MIN_NORMALIZED_CHARS: usize = 30;

/// Below this length, repeated `class` attributes mark a markup-heavy block.
const MARKUP_CHAR_LIMIT: usize = 100;

/// Sliding-window extractor parameterized by the block size.
pub struct BlockExtractor {
    min_block_size: usize,
    markup_attr: Regex,
    require_stmt: Regex,
}

impl BlockExtractor {
    pub fn new(min_block_size: usize) -> Self {
        Self {
            min_block_size,
            markup_attr: Regex::new(r"classname|class=").unwrap(),
            require_stmt: Regex::new(r"^const \w+ = require").unwrap(),
        }
    }

    /// Emit every non-trivial window of `min_block_size` added lines.
    pub fn extract(
        &self,
        file: &str,
        lines: &[AddedLine],
        normalizer: &Normalizer,
        out: &mut Vec<Block>,
    ) {
        if lines.len() < self.min_block_size {
            return;
        }

        for offset in 0..=(lines.len() - self.min_block_size) {
            let window = &lines[offset..offset + self.min_block_size];
            let raw_code = window
                .iter()
                .map(|l| l.content.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            let normalized_code = normalizer.normalize(&raw_code);

            if self.is_trivial(&normalized_code) {
                continue;
            }

            out.push(Block {
                file: file.to_string(),
                start_line: window[0].line_number,
                end_line: window[self.min_block_size - 1].line_number,
                fingerprint: fingerprint(&normalized_code),
                raw_code,
                normalized_code,
            });
        }
    }

    /// A block is trivial when its normalized form is too short, is
    /// markup-heavy, opens with a module preamble, or is a lone bracket.
    fn is_trivial(&self, normalized: &str) -> bool {
        let chars = normalized.chars().count();
        if chars < MIN_NORMALIZED_CHARS {
            return true;
        }
        if chars < MARKUP_CHAR_LIMIT && self.markup_attr.find_iter(normalized).count() > 2 {
            return true;
        }
        if normalized.starts_with("import ")
            || normalized.starts_with("export ")
            || self.require_stmt.is_match(normalized)
        {
            return true;
        }
        matches!(normalized.trim(), "{" | "}" | "(" | ")")
    }
}

#[cfg(test)]
#[path = "blocks_test.rs"]
mod tests;
