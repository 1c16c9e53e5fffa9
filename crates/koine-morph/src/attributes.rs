//! Decoded morphological attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    MorphError,
    vocab::{Case, Extra, Gender, Mood, Number, PartOfSpeech, Person, Tense, Voice},
};

/// Structured attributes decoded from a morphology code.
///
/// Only `part_of_speech` is always present. An absent category means the category does
/// not apply to the word, so a filter on an absent category never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredAttributes")]
pub struct MorphAttributes {
    /// Part of speech.
    pub part_of_speech: PartOfSpeech,
    /// Case, for declined forms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<Case>,
    /// Number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<Number>,
    /// Gender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Tense, for verbs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tense: Option<Tense>,
    /// Voice, for verbs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    /// Mood, for verbs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    /// Person, for finite verbs and personal pronouns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    /// Secondary tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<Extra>,
}

/// Pre-decoded attributes as older corpus exports store them.
///
/// Those exports put a particle's negative or interrogative tag under `kind` rather
/// than in `extras`.
#[derive(Deserialize)]
struct StoredAttributes {
    /// Part of speech.
    part_of_speech: PartOfSpeech,
    /// Case.
    #[serde(default)]
    case: Option<Case>,
    /// Number.
    #[serde(default)]
    number: Option<Number>,
    /// Gender.
    #[serde(default)]
    gender: Option<Gender>,
    /// Tense.
    #[serde(default)]
    tense: Option<Tense>,
    /// Voice.
    #[serde(default)]
    voice: Option<Voice>,
    /// Mood.
    #[serde(default)]
    mood: Option<Mood>,
    /// Person.
    #[serde(default)]
    person: Option<Person>,
    /// Secondary tags.
    #[serde(default)]
    extras: Vec<Extra>,
    /// Legacy particle tag.
    #[serde(default)]
    kind: Option<Extra>,
}

impl From<StoredAttributes> for MorphAttributes {
    fn from(stored: StoredAttributes) -> Self {
        let mut extras = stored.extras;
        if let Some(kind) = stored.kind
            && !extras.contains(&kind)
        {
            extras.push(kind);
        }
        Self {
            part_of_speech: stored.part_of_speech,
            case: stored.case,
            number: stored.number,
            gender: stored.gender,
            tense: stored.tense,
            voice: stored.voice,
            mood: stored.mood,
            person: stored.person,
            extras,
        }
    }
}

impl MorphAttributes {
    /// Creates attributes carrying only a part of speech.
    pub const fn new(part_of_speech: PartOfSpeech) -> Self {
        Self {
            part_of_speech,
            case: None,
            number: None,
            gender: None,
            tense: None,
            voice: None,
            mood: None,
            person: None,
            extras: Vec::new(),
        }
    }

    /// Creates attributes for a declined form with case, number and gender.
    pub const fn declined(
        part_of_speech: PartOfSpeech,
        case: Case,
        number: Number,
        gender: Gender,
    ) -> Self {
        let mut attributes = Self::new(part_of_speech);
        attributes.case = Some(case);
        attributes.number = Some(number);
        attributes.gender = Some(gender);
        attributes
    }

    /// Adds a secondary tag.
    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extras.push(extra);
        self
    }

    /// Returns true if these attributes carry the given property value.
    pub fn has(&self, property: MorphProperty) -> bool {
        match property {
            MorphProperty::PartOfSpeech(pos) => self.part_of_speech == pos,
            MorphProperty::Case(case) => self.case == Some(case),
            MorphProperty::Number(number) => self.number == Some(number),
            MorphProperty::Gender(gender) => self.gender == Some(gender),
            MorphProperty::Tense(tense) => self.tense == Some(tense),
            MorphProperty::Voice(voice) => self.voice == Some(voice),
            MorphProperty::Mood(mood) => self.mood == Some(mood),
            MorphProperty::Person(person) => self.person == Some(person),
            MorphProperty::Extra(extra) => self.extras.contains(&extra),
        }
    }

    /// Lists every property these attributes carry, part of speech first.
    pub fn properties(&self) -> Vec<MorphProperty> {
        let mut properties = vec![MorphProperty::PartOfSpeech(self.part_of_speech)];
        properties.extend(self.case.map(MorphProperty::Case));
        properties.extend(self.number.map(MorphProperty::Number));
        properties.extend(self.gender.map(MorphProperty::Gender));
        properties.extend(self.tense.map(MorphProperty::Tense));
        properties.extend(self.voice.map(MorphProperty::Voice));
        properties.extend(self.mood.map(MorphProperty::Mood));
        properties.extend(self.person.map(MorphProperty::Person));
        properties.extend(self.extras.iter().copied().map(MorphProperty::Extra));
        properties
    }

    /// Returns a short human-readable parsing, e.g. `noun genitive singular masculine`.
    pub fn parsing(&self) -> String {
        let mut parts: Vec<&str> = vec![self.part_of_speech.as_str()];
        parts.extend(self.tense.map(Tense::as_str));
        parts.extend(self.voice.map(Voice::as_str));
        parts.extend(self.mood.map(Mood::as_str));
        parts.extend(self.person.map(Person::as_str));
        parts.extend(self.case.map(Case::as_str));
        parts.extend(self.number.map(Number::as_str));
        parts.extend(self.gender.map(Gender::as_str));
        parts.extend(self.extras.iter().map(|extra| extra.as_str()));
        parts.join(" ")
    }
}

/// A single grammatical property and the value it must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphProperty {
    /// Part of speech.
    PartOfSpeech(PartOfSpeech),
    /// Case.
    Case(Case),
    /// Number.
    Number(Number),
    /// Gender.
    Gender(Gender),
    /// Tense.
    Tense(Tense),
    /// Voice.
    Voice(Voice),
    /// Mood.
    Mood(Mood),
    /// Person.
    Person(Person),
    /// Secondary tag.
    Extra(Extra),
}

impl MorphProperty {
    /// Property names accepted by [`MorphProperty::parse`].
    pub const KEYS: &'static [&'static str] = &[
        "part_of_speech",
        "case",
        "number",
        "gender",
        "tense",
        "voice",
        "mood",
        "person",
        "extra",
    ];

    /// Parses a property from its key and value names.
    pub fn parse(key: &str, value: &str) -> Result<Self, MorphError> {
        Ok(match key {
            "part_of_speech" | "pos" => Self::PartOfSpeech(value.parse()?),
            "case" => Self::Case(value.parse()?),
            "number" => Self::Number(value.parse()?),
            "gender" => Self::Gender(value.parse()?),
            "tense" => Self::Tense(value.parse()?),
            "voice" => Self::Voice(value.parse()?),
            "mood" => Self::Mood(value.parse()?),
            "person" => Self::Person(value.parse()?),
            "extra" | "extras" => Self::Extra(value.parse()?),
            _ => return Err(MorphError::UnknownProperty(key.to_string())),
        })
    }

    /// Returns the canonical key of this property.
    pub const fn key(self) -> &'static str {
        match self {
            Self::PartOfSpeech(_) => "part_of_speech",
            Self::Case(_) => "case",
            Self::Number(_) => "number",
            Self::Gender(_) => "gender",
            Self::Tense(_) => "tense",
            Self::Voice(_) => "voice",
            Self::Mood(_) => "mood",
            Self::Person(_) => "person",
            Self::Extra(_) => "extra",
        }
    }

    /// Returns the canonical name of the value.
    pub const fn value(self) -> &'static str {
        match self {
            Self::PartOfSpeech(v) => v.as_str(),
            Self::Case(v) => v.as_str(),
            Self::Number(v) => v.as_str(),
            Self::Gender(v) => v.as_str(),
            Self::Tense(v) => v.as_str(),
            Self::Voice(v) => v.as_str(),
            Self::Mood(v) => v.as_str(),
            Self::Person(v) => v.as_str(),
            Self::Extra(v) => v.as_str(),
        }
    }
}

impl fmt::Display for MorphProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key(), self.value())
    }
}
