//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::{
    Config, ConfigError, CorpusSource, OutputSettings,
    parse::{RawConfig, RawCorpus, RawOutput},
    resolve::resolve_corpus_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory holding the config file; relative corpus paths resolve against it.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Output settings: first defined value wins (highest precedence)
/// - Corpora: merged by name, first definition wins completely (path and dialect)
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let output = merge_output(configs);
    let corpora = merge_corpora(configs)?;

    Ok(Config { corpora, output })
}

/// Merges output settings, taking first defined value for each field.
fn merge_output(configs: &[ParsedConfig]) -> OutputSettings {
    let mut result = OutputSettings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref output) = parsed.config.output {
            apply_raw_output(&mut result, output);
        }
    }

    result
}

/// Applies raw output settings to result, overwriting any present values.
fn apply_raw_output(result: &mut OutputSettings, raw: &RawOutput) {
    if let Some(ref v) = raw.format {
        result.format.clone_from(v);
    }
    if let Some(v) = raw.window_before {
        result.window_before = v;
    }
    if let Some(v) = raw.window_after {
        result.window_after = v;
    }
}

/// Merges corpora from all configs, resolving paths.
///
/// Corpora are merged by name; the first definition wins completely.
fn merge_corpora(configs: &[ParsedConfig]) -> Result<Vec<CorpusSource>, ConfigError> {
    let mut seen: HashMap<String, CorpusSource> = HashMap::new();

    for parsed in configs {
        let Some(ref corpora) = parsed.config.corpus else {
            continue;
        };

        for (name, raw) in corpora {
            if seen.contains_key(name) {
                continue;
            }
            let source = convert_corpus(name, raw, parsed)?;
            seen.insert(name.clone(), source);
        }
    }

    let mut corpora: Vec<CorpusSource> = seen.into_values().collect();
    corpora.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(corpora)
}

/// Converts a raw corpus to the final type with defaults applied.
fn convert_corpus(
    name: &str,
    raw: &RawCorpus,
    parsed: &ParsedConfig,
) -> Result<CorpusSource, ConfigError> {
    Ok(CorpusSource {
        name: name.to_string(),
        path: resolve_corpus_path(&raw.path, parsed.dir())?,
        dialect: raw.dialect.unwrap_or_default(),
        origin: Some(parsed.path.clone()),
    })
}
