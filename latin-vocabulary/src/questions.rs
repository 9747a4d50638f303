use std::collections::BTreeSet;
use std::io;

use dictionary::{Chapter, DictionaryEntry, PartOfSpeech, NO_GENDER};
use drill::{AnswerSubmission, Verdict};

use crate::utilities::{closest_match, input, input_latin};

const COMMON_GENDERS: [&str; 5] = ["m.", "f.", "n.", "c.", NO_GENDER];

/// Genders to choose from while drilling `chapter`: the usual markers plus
/// any other marker the chapter uses, such as `n. pl.`.
pub fn gender_options(chapter: &Chapter) -> Vec<String> {
    let mut genders = chapter
        .words
        .iter()
        .map(DictionaryEntry::expected_gender)
        .collect::<BTreeSet<String>>();
    genders.extend(COMMON_GENDERS.map(str::to_owned));
    genders.into_iter().collect()
}

pub fn pos_options() -> Vec<&'static str> {
    PartOfSpeech::ALL.iter().map(|pos| pos.name()).collect()
}

/// Asks for every principal part, then gender and part of speech.
pub fn ask_question(entry: &DictionaryEntry, genders: &[String]) -> io::Result<AnswerSubmission> {
    let part_count = entry.parts().len();
    let mut parts = Vec::with_capacity(part_count);
    for index in 1..=part_count {
        parts.push(input_latin(&format!("Part {index}: "))?);
    }
    let gender = choose("Gender", genders)?.unwrap_or_default();
    let pos_options = pos_options();
    let pos = choose("Part of speech", &pos_options[..])?.unwrap_or_default();
    Ok(AnswerSubmission { parts, gender, pos })
}

// A blank line leaves the field unanswered.
fn choose<S: AsRef<str>>(label: &str, options: &[S]) -> io::Result<Option<String>> {
    let listing = options
        .iter()
        .enumerate()
        .map(|(index, option)| format!("[{}]: {}", index + 1, option.as_ref()))
        .collect::<Vec<String>>()
        .join("  ");
    println!("{label}? {listing}");
    loop {
        let answer = input(&format!("{label}: "))?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        let chosen = match answer.parse::<usize>() {
            Ok(number) => options.get(number.wrapping_sub(1)),
            Err(_) => closest_match(options, answer).and_then(|index| options.get(index)),
        };
        if let Some(option) = chosen {
            return Ok(Some(option.as_ref().to_owned()));
        }
        println!("Couldn't understand your answer, please try again.");
    }
}

pub fn render_feedback(verdict: &Verdict) -> String {
    if verdict.overall_correct {
        return "Correct!".to_owned();
    }
    let mut sentences = vec!["Incorrect.".to_owned()];
    if !verdict.parts_correct {
        if verdict.incorrect_part_indices.is_empty() {
            sentences.push("The number of Latin parts does not match.".to_owned());
        } else {
            let indices = verdict
                .incorrect_part_indices
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<String>>()
                .join(", ");
            sentences.push(format!("Check Latin Part(s): {indices}."));
        }
    }
    if !verdict.gender_correct {
        sentences.push(format!(
            "Gender is wrong (Expected: {}).",
            verdict.expected_gender
        ));
    }
    if !verdict.pos_correct {
        sentences.push(format!(
            "Part of Speech is wrong (Expected: {}).",
            verdict.expected_pos
        ));
    }
    sentences.join(" ")
}

pub fn render_entry(entry: &DictionaryEntry) -> String {
    let gender = match entry.gender.trim() {
        "" => "N/A",
        gender => gender,
    };
    format!(
        "Latin: {}\nGender: {}\nPOS: {}",
        entry.latin, gender, entry.pos
    )
}
