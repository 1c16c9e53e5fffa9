//! The dotted `morph_code` scheme used by the Rahlfs Septuagint corpus.
//!
//! Sections are joined with `.` and compound forms with `+`: `N.GSM`, `V.AAI3S`,
//! `RA.NSM`, `C+RD.ASM`. Patterns are anchored at the start of the code only.

use std::sync::LazyLock;

use regex::{Captures, escape};
use tracing::warn;

use crate::{
    CodeContext, MorphAttributes, MorphError,
    rules::{Rule, RuleTable, group},
    vocab::{Case, Extra, Gender, Mood, Number, PartOfSpeech, Person, Tense, Voice},
};

/// Codes in the upstream corpus that are transcription errors, keyed by word index.
const KNOWN_BAD: &[(usize, &str)] = &[
    (239_870, "V.API3S"),
    (332_804, "A"),
    (335_067, "A.N"),
    (422_765, "V.APS2S"),
    (422_848, "V.PMI3P"),
    (433_328, "N.DSF"),
    (473_507, "A.APN"),
    (483_471, "A.NSM"),
];

/// Returns the corrected code for a word index with a known-bad code.
pub fn correction(word_index: usize) -> Option<&'static str> {
    KNOWN_BAD
        .iter()
        .find(|(index, _)| *index == word_index)
        .map(|(_, code)| *code)
}

/// Decodes a dotted morphology code, applying known corrections first.
pub fn decode(code: &str, context: CodeContext<'_>) -> Result<MorphAttributes, MorphError> {
    let code = match correction(context.word_index) {
        Some(fixed) if fixed != code => {
            warn!(
                word_index = context.word_index,
                original = code,
                corrected = fixed,
                "replacing known-bad morphology code"
            );
            fixed
        }
        _ => code,
    };
    RULES.decode(code, context)
}

/// Maps a case letter.
fn case(letter: &str) -> Option<Case> {
    match letter {
        "N" => Some(Case::Nominative),
        "G" => Some(Case::Genitive),
        "D" => Some(Case::Dative),
        "A" => Some(Case::Accusative),
        "V" => Some(Case::Vocative),
        _ => None,
    }
}

/// Maps a number letter. The Septuagint keeps the dual.
fn number(letter: &str) -> Option<Number> {
    match letter {
        "S" => Some(Number::Singular),
        "P" => Some(Number::Plural),
        "D" => Some(Number::Dual),
        _ => None,
    }
}

/// Maps a gender letter.
fn gender(letter: &str) -> Option<Gender> {
    match letter {
        "M" => Some(Gender::Masculine),
        "F" => Some(Gender::Feminine),
        "N" => Some(Gender::Neuter),
        _ => None,
    }
}

/// Maps a tense letter. `X` is the perfect and `Y` the pluperfect.
fn tense(letter: &str) -> Option<Tense> {
    match letter {
        "P" => Some(Tense::Present),
        "I" => Some(Tense::Imperfect),
        "F" => Some(Tense::Future),
        "A" => Some(Tense::Aorist),
        "X" => Some(Tense::Perfect),
        "Y" => Some(Tense::Pluperfect),
        _ => None,
    }
}

/// Maps a voice letter.
fn voice(letter: &str) -> Option<Voice> {
    match letter {
        "A" => Some(Voice::Active),
        "M" => Some(Voice::Middle),
        "P" => Some(Voice::Passive),
        _ => None,
    }
}

/// Maps a mood letter. `D` is the imperative.
fn mood(letter: &str) -> Option<Mood> {
    match letter {
        "I" => Some(Mood::Indicative),
        "D" => Some(Mood::Imperative),
        "S" => Some(Mood::Subjunctive),
        "O" => Some(Mood::Optative),
        "N" => Some(Mood::Infinitive),
        "P" => Some(Mood::Participle),
        _ => None,
    }
}

/// Maps a person digit.
fn person(digit: &str) -> Option<Person> {
    match digit {
        "1" => Some(Person::First),
        "2" => Some(Person::Second),
        "3" => Some(Person::Third),
        _ => None,
    }
}

/// Fills whichever of the `case`, `number` and `gender` groups matched.
fn nominal(mut attributes: MorphAttributes, captures: &Captures<'_>) -> Option<MorphAttributes> {
    if let Some(m) = captures.name("case") {
        attributes.case = Some(case(m.as_str())?);
    }
    if let Some(m) = captures.name("number") {
        attributes.number = Some(number(m.as_str())?);
    }
    if let Some(m) = captures.name("gender") {
        attributes.gender = Some(gender(m.as_str())?);
    }
    Some(attributes)
}

/// A rule that accepts exactly `code` and yields `attributes`.
fn exact(code: &str, attributes: MorphAttributes) -> Rule {
    Rule::new(&format!("^{}$", escape(code)), move |_| {
        Some(attributes.clone())
    })
}

/// A nominal rule: `prefix` followed by `shape`, whose named groups fill the categories.
fn declined(prefix: &str, shape: &str, attributes: MorphAttributes) -> Rule {
    Rule::new(&format!("^{prefix}{shape}"), move |c| {
        nominal(attributes.clone(), c)
    })
}

/// Case, number and gender.
const CNG: &str = r"(?P<case>[NGDAV])(?P<number>[SPD])(?P<gender>[MFN])";
/// Case and number.
const CN: &str = r"(?P<case>[NGDAV])(?P<number>[SPD])";
/// Case only.
const C: &str = r"(?P<case>[NGDAV])";
/// Number only.
const N: &str = r"(?P<number>[SPD])";
/// Gender only, after an unread case letter and a space.
const G: &str = r"[NGDAV] (?P<gender>[MFN])";

/// Tense (group 1), voice (group 2) and mood (group 3) shared by every verb rule.
fn verb(captures: &Captures<'_>) -> Option<MorphAttributes> {
    let mut attributes = MorphAttributes::new(PartOfSpeech::Verb);
    attributes.tense = Some(tense(group(captures, 1)?)?);
    attributes.voice = Some(voice(group(captures, 2)?)?);
    attributes.mood = Some(mood(group(captures, 3)?)?);
    Some(attributes)
}

/// The dotted-code rule table.
static RULES: LazyLock<RuleTable> = LazyLock::new(|| {
    use PartOfSpeech::{Adjective, Adverb, Article, Conjunction, Noun, Particle, Pronoun};

    let numeral = MorphAttributes::new(Adjective).with_extra(Extra::Numeral);
    let relative = MorphAttributes::new(Pronoun).with_extra(Extra::Relative);

    RuleTable::new(
        "morph-code",
        vec![
            // Bare codes. Compound prefixes (`P+X`, `C+D`) are classed by their last part.
            exact("P", MorphAttributes::new(PartOfSpeech::Preposition)),
            exact("P+X", MorphAttributes::new(Conjunction)),
            exact("C", MorphAttributes::new(Conjunction)),
            exact("X", MorphAttributes::new(Particle)),
            exact("C+X", MorphAttributes::new(Particle)),
            exact("D", MorphAttributes::new(Adverb)),
            exact("D.P", MorphAttributes::new(Adverb)),
            exact("C+D", MorphAttributes::new(Adverb)),
            exact("M", numeral.clone()),
            exact("I", MorphAttributes::new(PartOfSpeech::Interjection)),
            exact("N", MorphAttributes::new(Noun)),
            exact("A", MorphAttributes::new(Adjective)),
            exact("A.B", MorphAttributes::new(Adjective)),
            exact("RA+A", MorphAttributes::new(Adjective)),
            exact("RI", MorphAttributes::new(Pronoun)),
            // Nouns.
            declined(r"N\.", CNG, MorphAttributes::new(Noun)),
            declined(r"RD\+N\.", CNG, MorphAttributes::new(Noun)),
            declined(r"M3M\.", CNG, MorphAttributes::new(Noun)),
            declined(r"N\.", CN, MorphAttributes::new(Noun)),
            declined(r"N\.", N, MorphAttributes::new(Noun)),
            declined(r"N\.", G, MorphAttributes::new(Noun)),
            declined(r"N\.", C, MorphAttributes::new(Noun)),
            // Adjectives, numerals included.
            declined(r"A\.", CNG, MorphAttributes::new(Adjective)),
            declined(r"P\+A\.", CNG, MorphAttributes::new(Adjective)),
            declined(r"RA\+A\.", CNG, MorphAttributes::new(Adjective)),
            declined(r"A\.", C, MorphAttributes::new(Adjective)),
            declined(r"A\.", N, MorphAttributes::new(Adjective)),
            Rule::new(r"^A[1-9]", |_| Some(MorphAttributes::new(Adjective))),
            declined(r"M\.", CNG, numeral.clone()),
            declined(r"M\.", CN, numeral),
            // Verbs.
            Rule::new(r"^V\.([PFIAXY])([AMP])([IDSO])([123])([SPD])", |c| {
                let mut attributes = verb(c)?;
                attributes.person = Some(person(group(c, 4)?)?);
                attributes.number = Some(number(group(c, 5)?)?);
                Some(attributes)
            }),
            Rule::new(r"^V\.([PFIAXY])([AMP])([IDSO])", verb),
            Rule::new(r"^V\.([PFIAXY])([AMP])(P)([NGDAV])([SPD])([MFN])", |c| {
                let mut attributes = verb(c)?;
                attributes.case = Some(case(group(c, 4)?)?);
                attributes.number = Some(number(group(c, 5)?)?);
                attributes.gender = Some(gender(group(c, 6)?)?);
                Some(attributes)
            }),
            Rule::new(r"^V\.([PFIAXY])([AMP])(P)", verb),
            Rule::new(r"^V\.([PFIAXY])([AMP])(N)", verb),
            // Article and pronouns.
            declined(r"RA\.", CNG, MorphAttributes::new(Article)),
            declined(r"RR\.", CNG, relative.clone()),
            declined(r"RA\.", CN, relative),
            declined(r"RD\.", CNG, MorphAttributes::new(Pronoun)),
            declined(r"C\+RD\.", CNG, MorphAttributes::new(Pronoun)),
            declined(r"RD\.", CN, MorphAttributes::new(Pronoun)),
            declined(r"RP\.", CN, MorphAttributes::new(Pronoun)),
            declined(
                r"RI\.",
                CNG,
                MorphAttributes::new(Pronoun).with_extra(Extra::Interrogative),
            ),
            declined(
                r"RI\.",
                C,
                MorphAttributes::new(Pronoun).with_extra(Extra::Interrogative),
            ),
            declined(r"RX\.", CNG, MorphAttributes::new(Pronoun)),
            declined(r"C\+RP\.", CN, MorphAttributes::new(Pronoun)),
            declined(r"RP\+X\.", CN, MorphAttributes::new(Pronoun)),
        ],
    )
});
