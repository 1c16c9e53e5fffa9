//! Integration tests for koine-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> resolve -> merge.

#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use koine_config::{Config, ConfigError, DEFAULT_FORMAT};
use koine_morph::Dialect;

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    /// Owned temporary directory.
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_no_config_returns_defaults() {
    let env = TestEnv::new();
    let dir = env.create_dir("work");
    env.create_file("work/.koine.toml", "root = true\n");

    let config = Config::load(&dir).unwrap();
    assert!(config.corpora.is_empty());
    assert_eq!(config.output.format, DEFAULT_FORMAT);
}

#[test]
fn test_load_single_config() {
    let env = TestEnv::new();
    env.create_file("data/opengnt.json", "[]");
    env.create_file(
        ".koine.toml",
        r#"
root = true

[corpus.nt]
path = "data/opengnt.json"
dialect = "rmac"

[output]
format = "book chapter:verse window"
window_before = 2
"#,
    );

    let config = Config::load(env.path()).unwrap();
    assert_eq!(config.corpora.len(), 1);
    let nt = &config.corpora[0];
    assert_eq!(nt.name, "nt");
    assert_eq!(nt.dialect, Dialect::Rmac);
    assert_eq!(nt.path, env.path().join("data/opengnt.json").canonicalize().unwrap());
    assert_eq!(config.output.format, "book chapter:verse window");
    assert_eq!(config.output.window_before, 2);
    assert_eq!(config.output.window_after, 5);
}

#[test]
fn test_nested_configs_merge() {
    let env = TestEnv::new();
    env.create_file("nt.json", "[]");
    env.create_file("project/lxx.json", "[]");
    env.create_file(
        ".koine.toml",
        r#"
root = true

[corpus.nt]
path = "nt.json"

[output]
window_after = 8
"#,
    );
    env.create_file(
        "project/.koine.toml",
        r#"
[corpus.lxx]
path = "lxx.json"
dialect = "morph-code"

[output]
window_after = 1
"#,
    );
    let cwd = env.create_dir("project/src");

    let config = Config::load(&cwd).unwrap();
    let names: Vec<_> = config.corpora.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["lxx", "nt"]);
    assert_eq!(config.corpora[0].dialect, Dialect::MorphCode);
    assert_eq!(config.output.window_after, 1);
    assert_eq!(
        config.corpora[0].origin,
        Some(env.path().join("project/.koine.toml"))
    );
}

#[test]
fn test_invalid_toml_reports_path() {
    let env = TestEnv::new();
    let path = env.create_file(".koine.toml", "root = true\n[corpus.nt\n");

    let err = Config::load(env.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn test_missing_corpus_file_is_an_error() {
    let env = TestEnv::new();
    env.create_file(".koine.toml", "root = true\n[corpus.nt]\npath = \"gone.json\"\n");

    let err = Config::load(env.path()).unwrap_err();
    assert!(matches!(err, ConfigError::PathResolution { .. }));
}

#[test]
fn test_load_from_files_empty() {
    let config = Config::load_from_files(&[]).unwrap();
    assert!(config.corpora.is_empty());
    assert_eq!(config.output.window_before, 5);
}
