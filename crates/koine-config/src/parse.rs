//! Configuration file parsing.
//!
//! Parses individual `.koine.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{collections::HashMap, fs, path::Path};

use koine_morph::Dialect;
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Corpus definitions: name -> corpus config.
    pub corpus: Option<HashMap<String, RawCorpus>>,
    /// Output settings section.
    pub output: Option<RawOutput>,
}

/// Raw corpus definition from TOML.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct RawCorpus {
    /// Path to the corpus JSON file.
    pub path: String,
    /// Morphology code dialect of the corpus (`rmac` or `morph-code`).
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub dialect: Option<Dialect>,
}

/// Raw output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOutput {
    /// Result line template.
    pub format: Option<String>,
    /// Words shown before a match by the `window` placeholder.
    pub window_before: Option<usize>,
    /// Words shown after a match by the `window` placeholder.
    pub window_after: Option<usize>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
