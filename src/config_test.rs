use super::*;
use std::io::Write;

#[test]
fn defaults_match_tuned_values() {
    let config = AnalyzerConfig::default();
    assert_eq!(config.min_block_size, 10);
    assert_eq!(config.similarity_threshold, 0.85);
    assert_eq!(config.cluster_similarity_threshold, 0.90);
    assert_eq!(config.medium_percent, 15.0);
    assert_eq!(config.high_percent, 30.0);
}

#[test]
fn load_without_file_uses_defaults() {
    let config = AnalyzerConfig::load(None).unwrap();
    assert_eq!(config.min_block_size, 10);
}

#[test]
fn file_overrides_individual_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "min_block_size = 6\nsimilarity_threshold = 0.8").unwrap();
    let config = AnalyzerConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.min_block_size, 6);
    assert_eq!(config.similarity_threshold, 0.8);
    // Untouched fields keep their defaults.
    assert_eq!(config.cluster_similarity_threshold, 0.90);
    assert_eq!(config.high_percent, 30.0);
}

#[test]
fn unknown_keys_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "min_block_sise = 6").unwrap();
    assert!(AnalyzerConfig::load(Some(file.path())).is_err());
}

#[test]
fn missing_file_errors() {
    assert!(AnalyzerConfig::load(Some(Path::new("/no/such/config.toml"))).is_err());
}

#[test]
fn out_of_range_threshold_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "similarity_threshold = 1.5").unwrap();
    assert!(AnalyzerConfig::load(Some(file.path())).is_err());
}

#[test]
fn zero_block_size_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "min_block_size = 0").unwrap();
    assert!(AnalyzerConfig::load(Some(file.path())).is_err());
}

#[test]
fn inverted_severity_tiers_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "medium_percent = 40.0").unwrap();
    assert!(AnalyzerConfig::load(Some(file.path())).is_err());
}
