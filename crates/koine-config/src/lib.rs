//! Configuration system for koine.
//!
//! koine uses TOML configuration files named `.koine.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.koine.toml` files found, then loading `~/.koine.toml` as the global config with
//! lowest precedence.
//!
//! ```toml
//! [corpus.nt]
//! path = "data/opengnt.json"
//! dialect = "rmac"
//!
//! [corpus.lxx]
//! path = "~/data/lxx.json"
//! dialect = "morph-code"
//!
//! [output]
//! format = "book chapter.verse: vss_string"
//! window_before = 5
//! window_after = 5
//! ```

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files};
pub use error::ConfigError;
use koine_morph::Dialect;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawCorpus, RawOutput, parse_config_file, parse_config_str};
pub use resolve::resolve_corpus_path;

/// Default result line template.
pub const DEFAULT_FORMAT: &str = "book chapter.verse: vss_string";

/// Top-level merged configuration for koine.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Resolved corpora, sorted by name.
    pub corpora: Vec<CorpusSource>,
    /// Output settings.
    pub output: OutputSettings,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.koine.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }
}

/// Settings for rendering search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    /// Result line template; placeholder words are replaced per result.
    pub format: String,
    /// Words shown before a match by the `window` placeholder.
    pub window_before: usize,
    /// Words shown after a match by the `window` placeholder.
    pub window_after: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            window_before: 5,
            window_after: 5,
        }
    }
}

/// A corpus file to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSource {
    /// Name of the corpus, used in output and errors.
    pub name: String,
    /// Resolved absolute path to the corpus JSON file.
    pub path: PathBuf,
    /// Morphology code dialect of the corpus.
    pub dialect: Dialect,
    /// Config file that defined the corpus; `None` for a command-line argument.
    pub origin: Option<PathBuf>,
}

impl CorpusSource {
    /// Parses a command-line corpus argument: `PATH` or `PATH:DIALECT`.
    ///
    /// The path is resolved against `cwd` and the corpus is named after the file stem.
    /// A suffix after the last `:` counts as a dialect only if it names one, so paths
    /// containing colons still work.
    pub fn from_arg(arg: &str, cwd: &Path) -> Result<Self, ConfigError> {
        let (path, dialect) = match arg.rsplit_once(':') {
            Some((path, suffix)) => match suffix.parse::<Dialect>() {
                Ok(dialect) => (path, dialect),
                Err(_) => (arg, Dialect::default()),
            },
            None => (arg, Dialect::default()),
        };
        if path.is_empty() {
            return Err(ConfigError::InvalidCorpusArgument(arg.to_string()));
        }

        let path = resolve_corpus_path(path, cwd)?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| ConfigError::InvalidCorpusArgument(arg.to_string()))?
            .to_string();

        Ok(Self {
            name,
            path,
            dialect,
            origin: None,
        })
    }
}
