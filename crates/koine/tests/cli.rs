//! CLI integration tests for koine commands.
//!
//! These tests focus on exit codes and the content of result lines, over small fixture
//! corpora written into a temporary directory.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};

/// John 1:1-2: (surface word, lexeme, RMAC code, verse).
const JOHN: &[(&str, &str, &str, &str)] = &[
    ("Ἐν", "ἐν", "PREP", "1"),
    ("ἀρχῇ", "ἀρχή", "N-DSF", "1"),
    ("ἦν", "εἰμί", "V-IAI-3S", "1"),
    ("ὁ", "ὁ", "T-NSM", "1"),
    ("λόγος", "λόγος", "N-NSM", "1"),
    ("καὶ", "καί", "CONJ", "1"),
    ("ὁ", "ὁ", "T-NSM", "1"),
    ("λόγος", "λόγος", "N-NSM", "1"),
    ("ἦν", "εἰμί", "V-IAI-3S", "1"),
    ("πρὸς", "πρός", "PREP", "1"),
    ("τὸν", "ὁ", "T-ASM", "1"),
    ("θεόν", "θεός", "N-ASM", "1"),
    ("οὗτος", "οὗτος", "D-NSM", "2"),
    ("ἦν", "εἰμί", "V-IAI-3S", "2"),
    ("ἐν", "ἐν", "PREP", "2"),
    ("ἀρχῇ", "ἀρχή", "N-DSF", "2"),
    ("πρὸς", "πρός", "PREP", "2"),
    ("τὸν", "ὁ", "T-ASM", "2"),
    ("θεόν", "θεός", "N-ASM", "2"),
];

/// Genesis 1:1 in dotted codes.
const GENESIS: &[(&str, &str, &str, &str)] = &[
    ("ἐν", "ἐν", "P", "1"),
    ("ἀρχῇ", "ἀρχή", "N.DSF", "1"),
    ("ἐποίησεν", "ποιέω", "V.AAI3S", "1"),
    ("ὁ", "ὁ", "RA.NSM", "1"),
    ("θεὸς", "θεός", "N.NSM", "1"),
];

/// Builds corpus JSON for chapter 1 of a book.
fn corpus_json(book: &str, words: &[(&str, &str, &str, &str)]) -> String {
    let records: Vec<Value> = words
        .iter()
        .enumerate()
        .map(|(i, (word, lexeme, code, verse))| {
            json!({"Book": book, "Chapter": "1", "Verse": verse, "lexeme": [lexeme],
                   "word_index": i, "morph_code": code, "word": word})
        })
        .collect();
    Value::Array(records).to_string()
}

/// Creates a temp directory holding `nt.json`, `lxx.json` and a root config.
fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("nt.json"), corpus_json("John", JOHN)).unwrap();
    fs::write(dir.path().join("lxx.json"), corpus_json("Gen", GENESIS)).unwrap();
    fs::write(dir.path().join(".koine.toml"), "root = true\n").unwrap();
    dir
}

/// Helper to get a koine command.
fn koine() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("koine").unwrap()
}

/// Helper to run `koine` in `dir` with HOME isolated to it.
fn koine_in(dir: &Path) -> Command {
    let mut cmd = koine();
    cmd.env("HOME", dir).env_remove("KOINE_LOG").current_dir(dir);
    cmd
}

/// Runs a command and returns its stdout lines.
fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

mod search {
    use super::*;

    #[test]
    fn default_format_prints_verse() {
        let dir = fixture();
        let lines = stdout_lines(koine_in(dir.path()).args([
            "--corpus", "nt.json", "search", "lexeme", "λογος",
        ]));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("John 1.1: Ἐν ἀρχῇ ἦν ὁ λόγος"));
    }

    #[test]
    fn case_filter() {
        let dir = fixture();
        let lines = stdout_lines(koine_in(dir.path()).args([
            "--corpus", "nt.json", "search", "--out", "verse word", "lexeme", "θεος", "--case",
            "accusative",
        ]));
        assert_eq!(lines, vec!["1 θεόν", "2 θεόν"]);

        koine_in(dir.path())
            .args(["--corpus", "nt.json", "search", "lexeme", "θεος", "--case", "nominative"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn proximity_and_precedence() {
        let dir = fixture();
        let lines = stdout_lines(koine_in(dir.path()).args([
            "--corpus", "nt.json", "search", "--out", "word", "lexeme", "λογος", "and", "ante",
            "1",
        ]));
        assert_eq!(lines, vec!["ὁ", "ὁ"]);

        let lines = stdout_lines(koine_in(dir.path()).args([
            "--corpus", "nt.json", "search", "--out", "word", "morph", "pos", "article", "or",
            "lexeme", "θεος", "and", "morph", "case", "accusative",
        ]));
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4..], ["θεόν", "θεόν"]);
    }

    #[test]
    fn within_reference() {
        let dir = fixture();
        let lines = stdout_lines(koine_in(dir.path()).args([
            "--corpus", "nt.json", "search", "--within", "John 1:2", "--out", "chapter:verse",
            "lexeme", "θεος",
        ]));
        assert_eq!(lines, vec!["1:2"]);
    }

    #[test]
    fn count_only() {
        let dir = fixture();
        let lines = stdout_lines(koine_in(dir.path()).args([
            "--corpus", "nt.json", "search", "--count", "lexeme", "εν",
        ]));
        assert_eq!(lines, vec!["2"]);
    }

    #[test]
    fn json_output() {
        let dir = fixture();
        let output = koine_in(dir.path())
            .args(["--corpus", "nt.json", "search", "--json", "lexeme", "θεος"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let json: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(json["query"], "lexeme θεος");
        assert_eq!(json["total_matches"], 2);
        let first = &json["results"][0];
        assert_eq!(first["corpus"], "nt");
        assert_eq!(first["word_index"], 11);
        assert_eq!(first["book"], "John");
        assert_eq!(first["code"], "N-ASM");
        assert_eq!(first["morph"]["case"], "accusative");
    }

    #[test]
    fn several_corpora_in_given_order() {
        let dir = fixture();
        let lines = stdout_lines(koine_in(dir.path()).args([
            "--corpus",
            "nt.json",
            "--corpus",
            "lxx.json:morph-code",
            "search",
            "--out",
            "book word",
            "lexeme",
            "θεος",
        ]));
        assert_eq!(lines, vec!["John θεόν", "John θεόν", "Gen θεὸς"]);
    }

    #[test]
    fn configured_corpora_and_format() {
        let dir = fixture();
        fs::write(
            dir.path().join(".koine.toml"),
            "root = true\n\n[corpus.lxx]\npath = \"lxx.json\"\ndialect = \"morph-code\"\n\n[output]\nformat = \"book chapter:verse word (parsing)\"\n",
        )
        .unwrap();
        let lines = stdout_lines(koine_in(dir.path()).args(["search", "morph", "tense", "aorist"]));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Gen 1:1 ἐποίησεν (verb aorist active indicative"));
    }

    #[test]
    fn syntax_error_is_reported() {
        let dir = fixture();
        koine_in(dir.path())
            .args(["--corpus", "nt.json", "search", "lexeme", "a", "and"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing an operand"));

        koine_in(dir.path())
            .args(["--corpus", "nt.json", "search", "lemma", "λογος"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown search type"))
            .stderr(predicate::str::contains("hint:"));
    }

    #[test]
    fn unknown_flag_is_reported() {
        let dir = fixture();
        koine_in(dir.path())
            .args(["--corpus", "nt.json", "search", "lexeme", "λογος", "--aspect", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown flag"));
    }

    #[test]
    fn no_corpora_is_an_error() {
        let dir = fixture();
        koine_in(dir.path())
            .args(["search", "lexeme", "λογος"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no corpora configured"));
    }

    #[test]
    fn missing_corpus_file_is_an_error() {
        let dir = fixture();
        koine_in(dir.path())
            .args(["--corpus", "gone.json", "search", "lexeme", "λογος"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid --corpus"));
    }

    #[test]
    fn corpus_with_unknown_code_fails_to_load() {
        let dir = fixture();
        fs::write(
            dir.path().join("bad.json"),
            corpus_json("John", &[("λόγος", "λόγος", "N-ZZZ", "1")]),
        )
        .unwrap();
        koine_in(dir.path())
            .args(["--corpus", "bad.json", "search", "lexeme", "λογος"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load corpus bad"))
            .stderr(predicate::str::contains("defined in").not());
    }

    #[test]
    fn configured_corpus_failure_names_its_config() {
        let dir = fixture();
        fs::write(
            dir.path().join("bad.json"),
            corpus_json("John", &[("λόγος", "λόγος", "N-ZZZ", "1")]),
        )
        .unwrap();
        fs::write(
            dir.path().join(".koine.toml"),
            "root = true\n[corpus.nt]\npath = \"bad.json\"\n",
        )
        .unwrap();
        koine_in(dir.path())
            .args(["search", "lexeme", "λογος"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load corpus nt"))
            .stderr(predicate::str::contains(".koine.toml"));
    }

    #[test]
    fn broken_config_fails_search() {
        let dir = fixture();
        fs::write(dir.path().join(".koine.toml"), "root = true\n[corpus.nt\n").unwrap();
        koine_in(dir.path())
            .args(["search", "lexeme", "λογος"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}

mod explain {
    use super::*;

    #[test]
    fn prints_tokens_and_tree() {
        let dir = fixture();
        koine_in(dir.path())
            .args(["explain", "lexeme", "λογος", "--case", "genitive", "and", "window", "1", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Tokens:"))
            .stdout(predicate::str::contains("Parsed AST:"))
            .stdout(predicate::str::contains("Lexeme(\"λογος\")"))
            .stdout(predicate::str::contains("case=genitive"))
            .stdout(predicate::str::contains("Window(1, 1)"));
    }

    #[test]
    fn reports_unbalanced_brackets() {
        let dir = fixture();
        koine_in(dir.path())
            .args(["explain", "(lexeme", "a"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unclosed bracket"));
    }

    #[test]
    fn ignores_broken_config() {
        let dir = fixture();
        fs::write(dir.path().join(".koine.toml"), "root = \n").unwrap();
        koine_in(dir.path())
            .args(["explain", "ante", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Ante(2)"));
    }
}

mod decode {
    use super::*;

    #[test]
    fn rmac_code() {
        let dir = fixture();
        koine_in(dir.path())
            .args(["decode", "N-GSM"])
            .assert()
            .success()
            .stdout(predicate::str::contains("noun genitive singular masculine"));
    }

    #[test]
    fn morph_code_as_json() {
        let dir = fixture();
        let output = koine_in(dir.path())
            .args(["decode", "V.AAI3S", "--dialect", "morph-code", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let json: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(json["part_of_speech"], "verb");
        assert_eq!(json["tense"], "aorist");
        assert_eq!(json["person"], "third");
        assert!(json.get("case").is_none());
    }

    #[test]
    fn unknown_code_fails() {
        let dir = fixture();
        koine_in(dir.path())
            .args(["decode", "XYZ"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown morphology code"));
    }
}

mod books {
    use super::*;

    #[test]
    fn lists_books_per_corpus() {
        let dir = fixture();
        koine_in(dir.path())
            .args(["--corpus", "nt.json", "--corpus", "lxx.json:lxx", "books"])
            .assert()
            .success()
            .stdout(predicate::str::contains("John"))
            .stdout(predicate::str::contains("1:2"))
            .stdout(predicate::str::contains("Gen"));
    }

    #[test]
    fn json_output() {
        let dir = fixture();
        let output = koine_in(dir.path())
            .args(["--corpus", "nt.json", "books", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let json: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(json[0]["name"], "nt");
        assert_eq!(json[0]["words"], 19);
        assert_eq!(json[0]["books"][0]["name"], "John");
        assert_eq!(json[0]["books"][0]["chapter_limits"], json!([[1, 2]]));
    }
}
