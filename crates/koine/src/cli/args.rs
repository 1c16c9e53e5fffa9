//! Clap argument definitions for the `koine` CLI.

use clap::{ArgAction, Args, Parser, Subcommand};
use koine_morph::Dialect;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "koine")]
#[command(about = "Search tagged Koine Greek corpora by lexeme, morphology and proximity")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log verbosity (-v info, -vv debug, -vvv trace); KOINE_LOG overrides it
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Corpus file to search, as PATH or PATH:DIALECT (can be specified multiple times)
    #[arg(long = "corpus", value_name = "PATH[:DIALECT]", global = true)]
    pub corpora: Vec<String>,
}

/// A query given as one or more words.
///
/// Everything from the first query word on belongs to the query, so command options
/// must come before it.
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Query, e.g. `lexeme λογος --case genitive and window 2 2`
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "QUERY"
    )]
    pub words: Vec<String>,
}

impl QueryArgs {
    /// The query words joined with spaces.
    pub fn joined(&self) -> String {
        self.words.join(" ")
    }
}

/// Arguments for `koine search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Output template; placeholder words are replaced for every result
    /// (book chapter verse window clause vss_string num_rows parsing word lexeme)
    #[arg(long, value_name = "FORMAT")]
    pub out: Option<String>,

    /// Only search words inside a reference, e.g. "John 3" or "Gen 1:1-5"
    #[arg(long, value_name = "REFERENCE")]
    pub within: Option<String>,

    /// Words shown before a match by the window placeholder [default: 5]
    #[arg(long, value_name = "N")]
    pub before: Option<usize>,

    /// Words shown after a match by the window placeholder [default: 5]
    #[arg(long, value_name = "N")]
    pub after: Option<usize>,

    /// Print only the number of matches
    #[arg(long, conflicts_with = "json")]
    pub count: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    /// The query to run.
    pub query: QueryArgs,
}

/// Arguments for `koine explain`.
#[derive(Args, Debug, Clone)]
pub struct ExplainCommand {
    #[command(flatten)]
    /// The query to explain.
    pub query: QueryArgs,
}

/// Arguments for `koine decode`.
#[derive(Args, Debug, Clone)]
pub struct DecodeCommand {
    /// Morphology code, e.g. N-GSM or V.AAI3S
    pub code: String,

    /// Code dialect: rmac or morph-code
    #[arg(short = 'd', long, default_value_t = Dialect::Rmac)]
    pub dialect: Dialect,

    /// Corpus position of the word, for codes with known corrections
    #[arg(long, default_value_t = 0)]
    pub word_index: usize,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `koine books`.
#[derive(Args, Debug, Clone)]
pub struct BooksCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Supported `koine` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the corpora and print one line per match
    Search(SearchCommand),

    /// Show how a query is tokenized and parsed, without searching
    Explain(ExplainCommand),

    /// Decode a single morphology code
    Decode(DecodeCommand),

    /// List the books of each corpus with chapter and word counts
    Books(BooksCommand),
}

impl Commands {
    /// True if the command reads configuration files.
    ///
    /// Commands that never touch a corpus keep working under a broken config.
    pub const fn needs_config(&self) -> bool {
        matches!(self, Self::Search(_) | Self::Books(_))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn query_keeps_hyphenated_words() {
        let cli = parse(&["koine", "search", "lexeme", "λογος", "--case", "genitive"]);
        let Commands::Search(cmd) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(cmd.query.joined(), "lexeme λογος --case genitive");
        assert!(cmd.out.is_none());
    }

    #[test]
    fn options_before_query() {
        let cli = parse(&[
            "koine",
            "-vv",
            "--corpus",
            "nt.json:rmac",
            "search",
            "--out",
            "book chapter.verse",
            "--within",
            "John 3",
            "morph",
            "mood",
            "imperative",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.corpora, vec!["nt.json:rmac"]);
        let Commands::Search(cmd) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(cmd.out.as_deref(), Some("book chapter.verse"));
        assert_eq!(cmd.within.as_deref(), Some("John 3"));
        assert_eq!(cmd.query.joined(), "morph mood imperative");
    }

    #[test]
    fn search_requires_a_query() {
        assert!(Cli::try_parse_from(["koine", "search"]).is_err());
    }

    #[test]
    fn decode_dialect() {
        let cli = parse(&["koine", "decode", "N.GSM", "--dialect", "lxx"]);
        let Commands::Decode(cmd) = cli.command else {
            panic!("expected decode");
        };
        assert_eq!(cmd.dialect, Dialect::MorphCode);

        let cli = parse(&["koine", "decode", "N-GSM"]);
        let Commands::Decode(cmd) = cli.command else {
            panic!("expected decode");
        };
        assert_eq!(cmd.dialect, Dialect::Rmac);
        assert!(Cli::try_parse_from(["koine", "decode", "N-GSM", "-d", "hebrew"]).is_err());
    }

    #[test]
    fn only_corpus_commands_need_config() {
        assert!(parse(&["koine", "books"]).command.needs_config());
        assert!(!parse(&["koine", "explain", "ante", "1"]).command.needs_config());
    }
}
