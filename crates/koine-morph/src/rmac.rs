//! Robinson's Morphological Analysis Codes (RMAC), as used by the OpenGNT corpus.
//!
//! RMAC codes are hyphen-separated with fixed positions inside each section:
//! `N-GSM`, `V-2AAI-3S`, `P-1NS`, `S-1SNSM`, `A-NSM-C`, `ADV-I`.

use std::sync::LazyLock;

use regex::Captures;

use crate::{
    CodeContext, MorphAttributes, MorphError,
    rules::{Rule, RuleTable, group},
    vocab::{Case, Extra, Gender, Mood, Number, PartOfSpeech, Person, Tense, Voice},
};

/// Decodes an RMAC code.
pub fn decode(code: &str, context: CodeContext<'_>) -> Result<MorphAttributes, MorphError> {
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

/// Maps a number letter.
fn number(letter: &str) -> Option<Number> {
    match letter {
        "S" => Some(Number::Singular),
        "P" => Some(Number::Plural),
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

/// Maps a tense letter (without the second-formation prefix).
fn tense(letter: &str) -> Option<Tense> {
    match letter {
        "P" => Some(Tense::Present),
        "I" => Some(Tense::Imperfect),
        "F" => Some(Tense::Future),
        "A" => Some(Tense::Aorist),
        "R" => Some(Tense::Perfect),
        "L" => Some(Tense::Pluperfect),
        _ => None,
    }
}

/// Maps a voice letter. `O` is the passive deponent and `D` the middle deponent.
fn voice(letter: &str) -> Option<Voice> {
    match letter {
        "A" => Some(Voice::Active),
        "P" | "O" => Some(Voice::Passive),
        "M" | "D" => Some(Voice::Middle),
        "N" | "E" => Some(Voice::MiddlePassive),
        _ => None,
    }
}

/// Maps a mood letter.
fn mood(letter: &str) -> Option<Mood> {
    match letter {
        "I" => Some(Mood::Indicative),
        "S" => Some(Mood::Subjunctive),
        "O" => Some(Mood::Optative),
        "M" => Some(Mood::Imperative),
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

/// Base attributes for a pronoun class letter.
fn pronoun(letter: &str) -> Option<MorphAttributes> {
    let base = MorphAttributes::new(PartOfSpeech::Pronoun);
    let extra = match letter {
        "P" => return Some(base),
        "R" => Extra::Relative,
        "D" => Extra::Demonstrative,
        "I" => Extra::Interrogative,
        "F" => Extra::Reflexive,
        "X" => Extra::Indefinite,
        "Q" => Extra::CorrelativeInterrogative,
        "S" => Extra::Possessive,
        "K" => Extra::Correlative,
        "C" => Extra::Reciprocal,
        _ => return None,
    };
    Some(base.with_extra(extra))
}

/// Appends one extra per suffix letter using the given map.
fn letter_extras(
    mut attributes: MorphAttributes,
    letters: Option<&str>,
    map: fn(char) -> Option<Extra>,
) -> Option<MorphAttributes> {
    for letter in letters.unwrap_or_default().chars() {
        attributes.extras.push(map(letter)?);
    }
    Some(attributes)
}

/// Declined attributes from case/number/gender groups at `first..first + 3`.
fn declined(pos: PartOfSpeech, captures: &Captures<'_>, first: usize) -> Option<MorphAttributes> {
    Some(MorphAttributes::declined(
        pos,
        case(group(captures, first)?)?,
        number(group(captures, first + 1)?)?,
        gender(group(captures, first + 2)?)?,
    ))
}

/// Tense/voice/mood shared by every verb rule: groups 1 (second formation), 2, 3 and 4.
fn verb(captures: &Captures<'_>) -> Option<MorphAttributes> {
    let mut attributes = MorphAttributes::new(PartOfSpeech::Verb);
    if group(captures, 1).is_some() {
        attributes.extras.push(Extra::SecondFormation);
    }
    attributes.tense = Some(tense(group(captures, 2)?)?);
    let voice_letter = group(captures, 3)?;
    attributes.voice = Some(voice(voice_letter)?);
    if matches!(voice_letter, "O" | "D") {
        attributes.extras.push(Extra::Deponent);
    }
    attributes.mood = Some(mood(group(captures, 4)?)?);
    Some(attributes)
}

/// The RMAC rule table.
static RULES: LazyLock<RuleTable> = LazyLock::new(|| {
    RuleTable::new(
        "rmac",
        vec![
            // Indeclinable parts of speech.
            Rule::new(r"^CONJ(?:-(N))?$", |c| {
                let attributes = MorphAttributes::new(PartOfSpeech::Conjunction);
                Some(match group(c, 1) {
                    Some(_) => attributes.with_extra(Extra::Negative),
                    None => attributes,
                })
            }),
            Rule::new(r"^COND(?:-(K))?$", |c| {
                let attributes = MorphAttributes::new(PartOfSpeech::Conjunction);
                Some(match group(c, 1) {
                    Some(_) => attributes.with_extra(Extra::CrasisKai),
                    None => attributes,
                })
            }),
            Rule::new(r"^PREP$", |_| {
                Some(MorphAttributes::new(PartOfSpeech::Preposition))
            }),
            Rule::new(r"^HEB(?:-(T))?$", |c| {
                let attributes = MorphAttributes::new(PartOfSpeech::HebrewWord);
                Some(match group(c, 1) {
                    Some(_) => attributes.with_extra(Extra::Title),
                    None => attributes,
                })
            }),
            Rule::new(r"^ARAM$", |_| {
                Some(MorphAttributes::new(PartOfSpeech::AramaicWord))
            }),
            Rule::new(r"^ADV(?:-?([KINCS]+))?$", |c| {
                letter_extras(
                    MorphAttributes::new(PartOfSpeech::Adverb),
                    group(c, 1),
                    |letter| match letter {
                        'K' => Some(Extra::CrasisKai),
                        'I' => Some(Extra::Interrogative),
                        'N' => Some(Extra::Negative),
                        'C' => Some(Extra::Comparative),
                        'S' => Some(Extra::Superlative),
                        _ => None,
                    },
                )
            }),
            Rule::new(r"^INJ$", |_| {
                Some(MorphAttributes::new(PartOfSpeech::Interjection))
            }),
            Rule::new(r"^PRT(?:-([NI]))?$", |c| {
                letter_extras(
                    MorphAttributes::new(PartOfSpeech::Particle),
                    group(c, 1),
                    |letter| match letter {
                        'N' => Some(Extra::Negative),
                        'I' => Some(Extra::Interrogative),
                        _ => None,
                    },
                )
            }),
            // Indeclinable nominals carry a tag but no case, number or gender.
            Rule::new(r"^N-PRI$", |_| {
                Some(
                    MorphAttributes::new(PartOfSpeech::Noun)
                        .with_extra(Extra::Proper)
                        .with_extra(Extra::Indeclinable),
                )
            }),
            Rule::new(r"^N-LI$", |_| {
                Some(MorphAttributes::new(PartOfSpeech::Noun).with_extra(Extra::IndeclinableLetter))
            }),
            Rule::new(r"^N-OI$", |_| {
                Some(MorphAttributes::new(PartOfSpeech::Noun).with_extra(Extra::Indeclinable))
            }),
            Rule::new(r"^A-NUI$", |_| {
                Some(
                    MorphAttributes::new(PartOfSpeech::Adjective)
                        .with_extra(Extra::IndeclinableNumeral),
                )
            }),
            // Declined nominals.
            Rule::new(r"^N-([NGDAV])([SP])([MFN])(?:-(LI|[PTLG]+))?$", |c| {
                let attributes = declined(PartOfSpeech::Noun, c, 1)?;
                if group(c, 4) == Some("LI") {
                    return Some(attributes.with_extra(Extra::IndeclinableLetter));
                }
                letter_extras(attributes, group(c, 4), |letter| match letter {
                    'P' => Some(Extra::Proper),
                    'T' => Some(Extra::Title),
                    'L' => Some(Extra::Location),
                    'G' => Some(Extra::Group),
                    _ => None,
                })
            }),
            Rule::new(r"^T-([NGDAV])([SP])([MFN])$", |c| {
                declined(PartOfSpeech::Article, c, 1)
            }),
            Rule::new(r"^A-([NGDAV])([SP])([MFN])(?:-(NUI|[CPGSL]+))?$", |c| {
                let attributes = declined(PartOfSpeech::Adjective, c, 1)?;
                if group(c, 4) == Some("NUI") {
                    return Some(attributes.with_extra(Extra::IndeclinableNumeral));
                }
                letter_extras(attributes, group(c, 4), |letter| match letter {
                    'C' => Some(Extra::Comparative),
                    'P' => Some(Extra::Proper),
                    'G' => Some(Extra::Group),
                    'S' => Some(Extra::Superlative),
                    'L' => Some(Extra::Location),
                    _ => None,
                })
            }),
            // Pronouns with person. The person digit sits in front of the case/number run,
            // and possessives put the possessor's number between the two; both are taken
            // out before case, number and gender are read.
            Rule::new(
                r"^([PRDIFXQSKC])-([123])([SP])?([NGDAV])([SP])([MFN])?(?:-(K))?$",
                |c| {
                    let mut attributes = pronoun(group(c, 1)?)?;
                    attributes.person = Some(person(group(c, 2)?)?);
                    match group(c, 3) {
                        Some("S") => attributes.extras.push(Extra::PossessorSingular),
                        Some("P") => attributes.extras.push(Extra::PossessorPlural),
                        _ => {}
                    }
                    attributes.case = Some(case(group(c, 4)?)?);
                    attributes.number = Some(number(group(c, 5)?)?);
                    if let Some(letter) = group(c, 6) {
                        attributes.gender = Some(gender(letter)?);
                    }
                    if group(c, 7).is_some() {
                        attributes.extras.push(Extra::CrasisKai);
                    }
                    Some(attributes)
                },
            ),
            Rule::new(r"^([PRDIFXQSKC])-([NGDAV])([SP])([MFN])$", |c| {
                let mut attributes = pronoun(group(c, 1)?)?;
                attributes.case = Some(case(group(c, 2)?)?);
                attributes.number = Some(number(group(c, 3)?)?);
                attributes.gender = Some(gender(group(c, 4)?)?);
                Some(attributes)
            }),
            // Verbs. An optional leading `2` marks a second tense formation and shifts
            // every later position by one.
            Rule::new(r"^V-(2)?([PIFARL])([APODNEM])([ISOM])-([123])([SP])$", |c| {
                let mut attributes = verb(c)?;
                attributes.person = Some(person(group(c, 5)?)?);
                attributes.number = Some(number(group(c, 6)?)?);
                Some(attributes)
            }),
            Rule::new(
                r"^V-(2)?([PIFARL])([APODNEM])(P)-([NGDAV])([SP])([MFN])$",
                |c| {
                    let mut attributes = verb(c)?;
                    attributes.case = Some(case(group(c, 5)?)?);
                    attributes.number = Some(number(group(c, 6)?)?);
                    attributes.gender = Some(gender(group(c, 7)?)?);
                    Some(attributes)
                },
            ),
            Rule::new(r"^V-(2)?([PIFARL])([APODNEM])(N)$", verb),
        ],
    )
});
