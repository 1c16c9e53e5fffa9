//! Grammatical vocabulary.
//!
//! One enum per grammatical category. Every value has a canonical lowercase name that is
//! shared by query flags, JSON corpora and display output. Legacy spellings written by
//! older corpus generators are accepted as aliases when parsing and deserializing.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::MorphError;

/// Declares a closed grammatical category with canonical names and parse aliases.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $category:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl $name {
            /// Every value of the category, in canonical order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Name of the category, as used in error messages.
            pub const CATEGORY: &'static str = $category;

            /// Returns the canonical name of this value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = MorphError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(MorphError::UnknownValue {
                        category: $category,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Part of speech. The only attribute every decoded word carries.
    PartOfSpeech, "part of speech" {
        /// Noun.
        Noun => "noun",
        /// Verb (finite, infinitive or participle).
        Verb => "verb",
        /// Adjective, including numerals used adjectivally.
        Adjective => "adjective",
        /// Pronoun of any kind.
        Pronoun => "pronoun",
        /// The definite article.
        Article => "article",
        /// Adverb.
        Adverb => "adverb",
        /// Preposition.
        Preposition => "preposition",
        /// Conjunction.
        Conjunction => "conjunction",
        /// Particle.
        Particle => "particle",
        /// Interjection.
        Interjection => "interjection",
        /// Transliterated Hebrew word.
        HebrewWord => "hebrew-word" | "hebrew word",
        /// Transliterated Aramaic word.
        AramaicWord => "aramaic-word" | "aramaic word",
    }
}

vocabulary! {
    /// Grammatical case.
    Case, "case" {
        /// Nominative.
        Nominative => "nominative",
        /// Genitive.
        Genitive => "genitive",
        /// Dative.
        Dative => "dative",
        /// Accusative.
        Accusative => "accusative",
        /// Vocative.
        Vocative => "vocative",
    }
}

vocabulary! {
    /// Grammatical number.
    Number, "number" {
        /// Singular.
        Singular => "singular",
        /// Plural.
        Plural => "plural",
        /// Dual (Septuagint only).
        Dual => "dual",
    }
}

vocabulary! {
    /// Grammatical gender.
    Gender, "gender" {
        /// Masculine.
        Masculine => "masculine",
        /// Feminine.
        Feminine => "feminine",
        /// Neuter.
        Neuter => "neuter",
    }
}

vocabulary! {
    /// Verbal tense.
    Tense, "tense" {
        /// Present.
        Present => "present",
        /// Imperfect.
        Imperfect => "imperfect",
        /// Future.
        Future => "future",
        /// Aorist.
        Aorist => "aorist",
        /// Perfect.
        Perfect => "perfect",
        /// Pluperfect.
        Pluperfect => "pluperfect",
    }
}

vocabulary! {
    /// Verbal voice.
    Voice, "voice" {
        /// Active.
        Active => "active",
        /// Middle.
        Middle => "middle",
        /// Passive.
        Passive => "passive",
        /// Middle or passive (form does not distinguish).
        MiddlePassive => "middle-passive" | "middle/passive",
    }
}

vocabulary! {
    /// Verbal mood.
    Mood, "mood" {
        /// Indicative.
        Indicative => "indicative",
        /// Subjunctive.
        Subjunctive => "subjunctive",
        /// Optative.
        Optative => "optative",
        /// Imperative.
        Imperative => "imperative",
        /// Infinitive.
        Infinitive => "infinitive",
        /// Participle.
        Participle => "participle",
    }
}

vocabulary! {
    /// Grammatical person.
    Person, "person" {
        /// First person.
        First => "first",
        /// Second person.
        Second => "second",
        /// Third person.
        Third => "third",
    }
}

vocabulary! {
    /// Secondary tags that refine a part of speech.
    Extra, "extra" {
        /// Proper noun or adjective.
        Proper => "proper",
        /// Title.
        Title => "title",
        /// Place name.
        Location => "location",
        /// Name of a people or group.
        Group => "group",
        /// Indeclinable form.
        Indeclinable => "indeclinable",
        /// Indeclinable letter (e.g. alpha, omega used as names).
        IndeclinableLetter => "indeclinable-letter" | "indeclinable letter",
        /// Indeclinable numeral.
        IndeclinableNumeral => "indeclinable-numeral" | "indeclinable numeral",
        /// Numeral.
        Numeral => "numeral",
        /// Comparative degree.
        Comparative => "comparative",
        /// Superlative degree.
        Superlative => "superlative",
        /// Negative.
        Negative => "negative",
        /// Interrogative.
        Interrogative => "interrogative",
        /// Crasis with καί.
        CrasisKai => "crasis-kai" | "elided with και",
        /// Relative pronoun.
        Relative => "relative",
        /// Demonstrative pronoun.
        Demonstrative => "demonstrative",
        /// Reflexive pronoun.
        Reflexive => "reflexive",
        /// Indefinite pronoun.
        Indefinite => "indefinite",
        /// Correlative or interrogative pronoun.
        CorrelativeInterrogative => "correlative-interrogative" | "correlative or interrogative",
        /// Possessive pronoun.
        Possessive => "possessive",
        /// Correlative pronoun.
        Correlative => "correlative",
        /// Reciprocal pronoun.
        Reciprocal => "reciprocal",
        /// Second (strong) tense formation.
        SecondFormation => "second",
        /// Deponent verb.
        Deponent => "deponent",
        /// Possessive pronoun with a single possessor.
        PossessorSingular => "possessor-singular" | "singular",
        /// Possessive pronoun with several possessors.
        PossessorPlural => "possessor-plural" | "plural",
    }
}
