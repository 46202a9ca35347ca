//! Analyzer configuration.
//!
//! Every knob defaults to the values the surrounding review service was
//! tuned with; a TOML file can override individual fields at construction
//! time. There is no environment or runtime reconfiguration; a loaded
//! config is immutable for the life of the run.
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Thresholds and window sizing for the duplication pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Added lines per candidate window.
    pub min_block_size: usize,
    /// Minimum Jaccard similarity for a fuzzy pairwise match.
    pub similarity_threshold: f64,
    /// Minimum raw-code Jaccard similarity for joining two pairs into a
    /// cluster. Stricter than the pairwise threshold.
    pub cluster_similarity_threshold: f64,
    /// Duplication percentage at which severity becomes `medium`.
    pub medium_percent: f64,
    /// Duplication percentage at which severity becomes `high`.
    pub high_percent: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_block_size: 10,
            similarity_threshold: 0.85,
            cluster_similarity_threshold: 0.90,
            medium_percent: 15.0,
            high_percent: 30.0,
        }
    }
}

impl AnalyzerConfig {
    /// Load the defaults, optionally overridden by a TOML file.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let config = match path {
            None => Self::default(),
            Some(p) => {
                let text = fs::read_to_string(p)
                    .map_err(|err| format!("cannot read config {}: {err}", p.display()))?;
                toml::from_str(&text)?
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.min_block_size == 0 {
            return Err("min_block_size must be at least 1".into());
        }
        for (name, value) in [
            ("similarity_threshold", self.similarity_threshold),
            (
                "cluster_similarity_threshold",
                self.cluster_similarity_threshold,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be within [0, 1], got {value}").into());
            }
        }
        if self.medium_percent > self.high_percent {
            return Err("medium_percent must not exceed high_percent".into());
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
