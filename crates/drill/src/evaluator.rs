use std::collections::HashMap;

use dictionary::{DictionaryEntry, PartOfSpeech};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

static SYNONYM_PATTERNS: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    PartOfSpeech::ALL
        .iter()
        .flat_map(|pos| pos.accepted_variants())
        .map(|variant| (*variant, word_pattern(variant).unwrap()))
        .collect()
});

/// What the user entered for one word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSubmission {
    pub parts: Vec<String>,
    pub gender: String,
    pub pos: String,
}

impl AnswerSubmission {
    /// No part typed and neither choice made. Choices come from closed lists,
    /// so only a truly empty one counts as unanswered.
    pub fn is_blank(&self) -> bool {
        self.parts.iter().all(|part| part.trim().is_empty())
            && self.gender.is_empty()
            && self.pos.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub parts_correct: bool,
    /// 1-based. Empty when the number of parts did not match at all.
    pub incorrect_part_indices: Vec<usize>,
    pub gender_correct: bool,
    pub pos_correct: bool,
    pub overall_correct: bool,
    pub expected_gender: String,
    pub expected_pos: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Nothing was entered; ask again instead of scoring.
    NeedsInput,
    Scored(Verdict),
}

pub fn evaluate(submission: &AnswerSubmission, entry: &DictionaryEntry) -> Evaluation {
    if submission.is_blank() {
        return Evaluation::NeedsInput;
    }

    let target_parts: Vec<String> = entry.parts().into_iter().map(str::to_lowercase).collect();
    let (parts_correct, incorrect_part_indices) = check_parts(&submission.parts, &target_parts);

    let expected_gender = entry.expected_gender();
    let gender_correct = submission.gender == expected_gender;

    let expected_pos = entry.expected_pos();
    let pos_correct = pos_matches(&submission.pos, &expected_pos);

    let verdict = Verdict {
        parts_correct,
        incorrect_part_indices,
        gender_correct,
        pos_correct,
        overall_correct: parts_correct && gender_correct && pos_correct,
        expected_gender,
        expected_pos,
    };
    debug!(latin = %entry.latin, ?verdict, "evaluated answer");
    Evaluation::Scored(verdict)
}

fn check_parts(given: &[String], targets: &[String]) -> (bool, Vec<usize>) {
    if given.len() != targets.len() {
        return (false, Vec::new());
    }
    let incorrect: Vec<usize> = given
        .iter()
        .zip(targets)
        .enumerate()
        .filter(|(_, (given, target))| !part_matches(given, target))
        .map(|(index, _)| index + 1)
        .collect();
    (incorrect.is_empty(), incorrect)
}

// A leading hyphen on the target ("-que") may be left out.
fn part_matches(given: &str, target: &str) -> bool {
    let given = given.trim().to_lowercase();
    given == target || target.strip_prefix('-') == Some(given.as_str())
}

fn pos_matches(submitted: &str, expected: &str) -> bool {
    let submitted = submitted.trim().to_lowercase();
    if submitted.is_empty() {
        return false;
    }
    let variants = match submitted.parse::<PartOfSpeech>() {
        Ok(pos) => pos.accepted_variants().to_vec(),
        Err(_) => vec![submitted.as_str()],
    };
    variants
        .into_iter()
        .any(|variant| contains_word(expected, variant))
}

// Word characters are ASCII only, so "verbī" still contains the word "verb".
fn word_pattern(word: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(word)))
}

fn contains_word(haystack: &str, word: &str) -> bool {
    if let Some(pattern) = SYNONYM_PATTERNS.get(word) {
        return pattern.is_match(haystack);
    }
    match word_pattern(word) {
        Ok(pattern) => pattern.is_match(haystack),
        Err(error) => {
            warn!(word, %error, "couldn't build a part-of-speech pattern");
            false
        }
    }
}
