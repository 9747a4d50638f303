use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Gender reported for entries that carry none.
pub const NO_GENDER: &str = "none";

/// One word of the textbook list, as stored in `words.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Comma-separated principal parts, in citation order.
    pub latin: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub translation: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pos: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gender: String,
}

impl DictionaryEntry {
    pub fn new(latin: &str, translation: &str, pos: &str, gender: &str) -> Self {
        Self {
            latin: latin.to_owned(),
            translation: translation.to_owned(),
            pos: pos.to_owned(),
            gender: gender.to_owned(),
        }
    }

    /// The principal parts, trimmed, in the order they must be answered.
    pub fn parts(&self) -> Vec<&str> {
        self.latin.split(',').map(str::trim).collect()
    }

    pub fn expected_gender(&self) -> String {
        match self.gender.trim() {
            "" => NO_GENDER.to_owned(),
            gender => gender.to_owned(),
        }
    }

    /// Lower-cased part of speech, with chants folded into [`PartOfSpeech::Chant`].
    pub fn expected_pos(&self) -> String {
        let pos = self.pos.trim().to_lowercase();
        if self.is_chant(&pos) {
            PartOfSpeech::Chant.name().to_owned()
        } else {
            pos
        }
    }

    // Chants are not tagged in the word list: they are either named as such in
    // the translation or cited as bare endings ("-bam, -bās, ...").
    fn is_chant(&self, pos: &str) -> bool {
        self.translation.to_lowercase().contains("chant")
            || (pos.is_empty()
                && self
                    .parts()
                    .first()
                    .is_some_and(|part| part.starts_with('-')))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(rename = "chapter", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub words: Vec<DictionaryEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    Chant,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 9] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Preposition,
        PartOfSpeech::Conjunction,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Interjection,
        PartOfSpeech::Chant,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Chant => "chant",
        }
    }

    /// Spellings that count as this part of speech inside a dictionary `pos` field.
    pub fn accepted_variants(self) -> &'static [&'static str] {
        match self {
            PartOfSpeech::Noun => &["noun"],
            PartOfSpeech::Pronoun => &["pronoun"],
            PartOfSpeech::Verb => &["verb"],
            PartOfSpeech::Adjective => &["adjective", "adj"],
            PartOfSpeech::Adverb => &["adverb", "adv"],
            PartOfSpeech::Preposition => &["preposition", "prep"],
            PartOfSpeech::Conjunction => &["conjunction", "conj"],
            PartOfSpeech::Interjection => &["interjection"],
            PartOfSpeech::Chant => &["chant"],
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown part of speech {0:?}")]
pub struct UnknownPartOfSpeech(pub String);

impl FromStr for PartOfSpeech {
    type Err = UnknownPartOfSpeech;

    /// Accepts canonical names only; abbreviations are not categories of their own.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        PartOfSpeech::ALL
            .into_iter()
            .find(|pos| pos.name() == name)
            .ok_or(UnknownPartOfSpeech(name))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_are_trimmed_and_positional() {
        let entry = DictionaryEntry::new("porto,  portāre ,portāvī, portātum", "carry", "verb", "");
        assert_eq!(entry.parts(), vec!["porto", "portāre", "portāvī", "portātum"]);
    }

    #[test]
    fn empty_gender_becomes_none() {
        assert_eq!(DictionaryEntry::new("et", "and", "conj", "").expected_gender(), "none");
        assert_eq!(DictionaryEntry::new("et", "and", "conj", "   ").expected_gender(), "none");
        assert_eq!(DictionaryEntry::new("puella, puellae", "girl", "noun", " f. ").expected_gender(), "f.");
    }

    #[test]
    fn pos_is_trimmed_and_lowercased() {
        let entry = DictionaryEntry::new("bene", "well", " Adverb ", "");
        assert_eq!(entry.expected_pos(), "adverb");
    }

    #[test]
    fn chant_named_in_translation_overrides_pos() {
        let entry = DictionaryEntry::new("sum, es, est", "Present Tense Chant of sum", "verb", "");
        assert_eq!(entry.expected_pos(), "chant");
    }

    #[test]
    fn leading_hyphen_without_pos_is_a_chant() {
        let entry = DictionaryEntry::new("-bam, -bās, -bat", "imperfect endings", "", "");
        assert_eq!(entry.expected_pos(), "chant");
    }

    #[test]
    fn leading_hyphen_with_pos_keeps_pos() {
        let entry = DictionaryEntry::new("-que", "and", "conjunction", "");
        assert_eq!(entry.expected_pos(), "conjunction");
    }

    #[test]
    fn pos_parses_canonical_names_only() {
        assert_eq!("Verb".parse::<PartOfSpeech>(), Ok(PartOfSpeech::Verb));
        assert_eq!(" chant ".parse::<PartOfSpeech>(), Ok(PartOfSpeech::Chant));
        assert_eq!(
            "adj".parse::<PartOfSpeech>(),
            Err(UnknownPartOfSpeech("adj".to_owned()))
        );
    }

    #[test]
    fn every_variant_list_starts_with_its_name() {
        for pos in PartOfSpeech::ALL {
            assert_eq!(pos.accepted_variants()[0], pos.to_string());
        }
    }

    #[test]
    fn missing_and_null_fields_deserialize_as_empty() {
        let entry: DictionaryEntry =
            serde_json::from_str(r#"{"latin": "et", "translation": "and", "gender": null}"#).unwrap();
        assert_eq!(entry.pos, "");
        assert_eq!(entry.gender, "");
    }
}
