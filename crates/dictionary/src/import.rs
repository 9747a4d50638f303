//! Conversion of the plain-text textbook word list into `words.json`.
//!
//! The list groups words under `CHAPTER ...` headings. Each word line reads
//! `latin - english`, with the part of speech either in parentheses at the end
//! of the Latin side or after the last comma of the English side, and the
//! gender as the last comma-separated token of the Latin side.

use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{Chapter, DictionaryEntry};

static POS_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(([^)]+)\)$").unwrap());

static GENDER_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(m\.|f\.|n\.|c\.|m/f|m\./f\.|pl\.|m\. pl\.|f\. pl\.|n\. pl\.)$").unwrap()
});

static CHAPTER_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bCHAPTER\b").unwrap());

static VOCABULARY_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bVOCABULARY\b").unwrap());

static NUMBER_WORDS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        ("ONE", "1"),
        ("TWO", "2"),
        ("THREE", "3"),
        ("FOUR", "4"),
        ("FIVE", "5"),
        ("SIX", "6"),
        ("SEVEN", "7"),
        ("EIGHT", "8"),
        ("NINE", "9"),
        ("TEN", "10"),
        ("ELEVEN", "11"),
        ("TWELVE", "12"),
        ("THIRTEEN", "13"),
        ("FOURTEEN", "14"),
        ("FIFTEEN", "15"),
        ("SIXTEEN", "16"),
        ("SEVENTEEN", "17"),
        ("EIGHTEEN", "18"),
        ("NINETEEN", "19"),
    ]
    .into_iter()
    .map(|(word, digits)| (Regex::new(&format!(r"(?i)\b{word}\b")).unwrap(), digits))
    .collect()
});

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read word list {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize chapters: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub fn import_file(path: &Path) -> Result<Vec<Chapter>, ImportError> {
    let text = std::fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_owned(),
        source,
    })?;
    import_word_list(&text)
}

pub fn import_word_list(text: &str) -> Result<Vec<Chapter>, ImportError> {
    let mut chapters: Vec<Chapter> = Vec::new();
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if line.to_uppercase().starts_with("CHAPTER") {
            chapters.push(Chapter {
                name: chapter_title(line),
                words: Vec::new(),
            });
            continue;
        }
        // words listed before the first heading have nowhere to go
        let Some(chapter) = chapters.last_mut() else {
            continue;
        };
        match parse_line(line) {
            Some(entry) => chapter.words.push(entry),
            None => debug!(line, "skipping line without a translation"),
        }
    }
    if chapters.is_empty() {
        warn!("no chapters found in the word list");
    }
    Ok(chapters)
}

pub fn write_json(chapters: &[Chapter], path: &Path) -> Result<(), ImportError> {
    let json = serde_json::to_string_pretty(chapters)?;
    std::fs::write(path, json).map_err(|source| ImportError::Write {
        path: path.to_owned(),
        source,
    })
}

/// `"CHAPTER TWELVE VOCABULARY"` becomes `"Chapter 12"`.
pub fn chapter_title(heading: &str) -> String {
    let mut title = CHAPTER_WORD.replace_all(heading, "Chapter").into_owned();
    for (word, digits) in NUMBER_WORDS.iter() {
        title = word.replace_all(&title, *digits).into_owned();
    }
    VOCABULARY_WORD.replace_all(&title, "").trim().to_owned()
}

pub fn parse_line(line: &str) -> Option<DictionaryEntry> {
    let line = line.replace('–', "-");
    let mut sides = line.split(" - ");
    let latin_side = sides.next()?.trim();
    let english_side = sides.next()?.trim();

    let (mut latin, translation, pos) = match POS_SUFFIX.captures(latin_side) {
        Some(captures) => {
            let start = captures.get(0)?.start();
            (
                latin_side[..start].trim().to_owned(),
                english_side.to_owned(),
                captures[1].to_owned(),
            )
        }
        None => match english_side.rsplit_once(',') {
            Some((translation, pos)) => (
                latin_side.to_owned(),
                translation.trim().to_owned(),
                pos.trim().to_owned(),
            ),
            None => (latin_side.to_owned(), english_side.to_owned(), String::new()),
        },
    };

    let mut gender = String::new();
    if let Some((rest, last)) = latin.rsplit_once(',') {
        let last = last.trim();
        if GENDER_MARKER.is_match(last) {
            gender = last.to_owned();
            latin = rest.trim().to_owned();
        }
    }

    Some(DictionaryEntry {
        latin,
        translation,
        pos,
        gender,
    })
}
