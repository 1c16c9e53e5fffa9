//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use koine_config::{CONFIG_FILENAME, Config, CorpusSource};
use koine_corpus::Corpus;
use tracing::info;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Raw `--corpus` arguments.
    corpus_args: Vec<String>,
    /// Corpora loaded for this invocation.
    corpora: Option<Vec<Corpus>>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(corpus_args: Vec<String>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            corpus_args,
            corpora: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    pub fn load_cwd_only(corpus_args: Vec<String>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            corpus_args,
            corpora: None,
        })
    }

    /// Every corpus to search: configured corpora, then `--corpus` arguments.
    ///
    /// A `--corpus` file replaces a configured corpus of the same name.
    pub fn sources(&self) -> Result<Vec<CorpusSource>, ExitCode> {
        let mut sources = self.config.corpora.clone();
        for arg in &self.corpus_args {
            let source = CorpusSource::from_arg(arg, &self.cwd).map_err(|e| {
                eprintln!("error: invalid --corpus {arg:?}: {e}");
                ExitCode::FAILURE
            })?;
            sources.retain(|existing| existing.name != source.name);
            sources.push(source);
        }
        Ok(sources)
    }

    /// Returns the corpora, loading them on first use.
    pub fn corpora(&mut self) -> Result<&[Corpus], ExitCode> {
        let corpora = match self.corpora.take() {
            Some(corpora) => corpora,
            None => self.load_corpora()?,
        };
        Ok(self.corpora.insert(corpora).as_slice())
    }

    /// Loads every corpus source, failing if there are none.
    fn load_corpora(&self) -> Result<Vec<Corpus>, ExitCode> {
        let sources = self.sources()?;
        if sources.is_empty() {
            eprintln!("error: no corpora configured");
            eprintln!(
                "Pass --corpus PATH[:DIALECT], or add a [corpus.NAME] table to {CONFIG_FILENAME}."
            );
            return Err(ExitCode::FAILURE);
        }
        sources.iter().map(load_corpus_or_failure).collect()
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

/// Loads one corpus or exits with an error naming it.
fn load_corpus_or_failure(source: &CorpusSource) -> Result<Corpus, ExitCode> {
    let corpus = Corpus::load(&source.name, &source.path, source.dialect).map_err(|e| {
        eprintln!("error: failed to load corpus {}: {e}", source.name);
        if let Some(origin) = &source.origin {
            eprintln!("The corpus is defined in {}.", origin.display());
        }
        ExitCode::FAILURE
    })?;
    info!(
        corpus = %source.name,
        path = %source.path.display(),
        dialect = %source.dialect,
        words = corpus.len(),
        "loaded corpus"
    );
    Ok(corpus)
}
