//! Tests for configuration loading and layering.

use std::fs;

use super::config::{CostarConfig, SearchConfig};

#[test]
fn defaults_are_usable() {
    let config = CostarConfig::default();
    assert_eq!(config.data.dir.to_str(), Some("data"));
    assert_eq!(config.search.max_visited, None);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn load_without_file_yields_defaults() {
    let config = CostarConfig::load(None).unwrap();
    assert_eq!(config.search.max_visited, None);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn missing_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let config = CostarConfig::load(Some(&dir.path().join("nope.toml"))).unwrap();
    assert_eq!(config.logging.level, "info");
}

#[test]
fn toml_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("costar.toml");
    fs::write(
        &path,
        "[data]\ndir = \"imdb\"\n\n[search]\nmax_visited = 5000\n\n[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    let config = CostarConfig::load(Some(&path)).unwrap();
    assert_eq!(config.data.dir.to_str(), Some("imdb"));
    assert_eq!(config.search.max_visited, Some(5000));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("costar.toml");
    fs::write(&path, "[search]\nmax_visited = 12\n").unwrap();

    let config = CostarConfig::load(Some(&path)).unwrap();
    assert_eq!(config.search.max_visited, Some(12));
    assert_eq!(config.data.dir.to_str(), Some("data"));
}

#[test]
fn with_max_visited_builder() {
    let config = SearchConfig::with_max_visited(100);
    assert_eq!(config.max_visited, Some(100));
}
