//! Change-set loading from JSON.
//!
//! The review service hands the analyzer a JSON array of changed-file
//! descriptors; this module reads the same document from a file or stdin
//! so the analyzer can run standalone. A JSON `null` or a blank stream is
//! treated as "no files" rather than an error.
use std::error::Error;
use std::fs;
use std::io;
use std::path::Path;

use crate::analyzer::types::FileDescriptor;

/// Read descriptors from `path`, or from stdin when no path is given.
pub fn load_descriptors(path: Option<&Path>) -> Result<Vec<FileDescriptor>, Box<dyn Error>> {
    let text = match path {
        Some(p) => fs::read_to_string(p)
            .map_err(|err| format!("cannot read {}: {err}", p.display()))?,
        None => io::read_to_string(io::stdin())?,
    };
    parse_descriptors(&text)
}

/// Parse a JSON document into descriptors; `null` and blank input are empty.
pub fn parse_descriptors(text: &str) -> Result<Vec<FileDescriptor>, Box<dyn Error>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let files: Option<Vec<FileDescriptor>> = serde_json::from_str(text)?;
    Ok(files.unwrap_or_default())
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
