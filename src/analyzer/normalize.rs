//! Block normalization and content fingerprinting.
//!
//! Normalization removes what textual matching must not see: comments,
//! string-literal contents, whitespace runs, and letter case. The steps
//! apply in a fixed order
//! (line comments, block comments, literal elision, whitespace collapse,
//! trim, lowercase), so two blocks differing only in those dimensions
//! produce byte-identical normalized text and therefore equal fingerprints.
use regex::Regex;
use sha2::{Digest, Sha256};

/// Applies the normalization pipeline to raw block text.
pub struct Normalizer {
    line_comment: Regex,
    block_comment: Regex,
    double_quoted: Regex,
    single_quoted: Regex,
    backtick: Regex,
    whitespace: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            line_comment: Regex::new(r"//[^\n]*").unwrap(),
            block_comment: Regex::new(r"(?s)/\*.*?\*/").unwrap(),
            // Literal bodies are elided, not the literals themselves: the
            // quoting style survives as an empty literal. Escaped characters
            // (including escaped quotes and newlines) stay inside the body.
            double_quoted: Regex::new(r#"(?s)"(?:\\.|[^"\\])*""#).unwrap(),
            single_quoted: Regex::new(r"(?s)'(?:\\.|[^'\\])*'").unwrap(),
            backtick: Regex::new(r"(?s)`(?:\\.|[^`\\])*`").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Produce the normalized form of a raw code block.
    pub fn normalize(&self, raw: &str) -> String {
        let text = self.line_comment.replace_all(raw, "");
        let text = self.block_comment.replace_all(&text, "");
        let text = self.double_quoted.replace_all(&text, "\"\"");
        let text = self.single_quoted.replace_all(&text, "''");
        let text = self.backtick.replace_all(&text, "``");
        let text = self.whitespace.replace_all(&text, " ");
        text.trim().to_lowercase()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Hex-encoded SHA-256 digest of arbitrary text. Used both as the block
/// fingerprint (over normalized code) and as the cluster pattern hash
/// (over representative raw code).
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
