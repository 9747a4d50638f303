use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

mod dictionary;
pub mod import;

pub use dictionary::{Chapter, DictionaryEntry, PartOfSpeech, UnknownPartOfSpeech, NO_GENDER};

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse dictionary: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("the dictionary contains no chapters")]
    Empty,
}

/// The chapters of a word list, in textbook order.
#[derive(Debug, Clone)]
pub struct Dictionary {
    chapters: Vec<Chapter>,
}

impl Dictionary {
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        debug!(path = %path.display(), "loading dictionary");
        let content = std::fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        Self::from_chapters(serde_json::from_str(json)?)
    }

    /// Unnamed chapters are named after their position, starting at 1.
    pub fn from_chapters(mut chapters: Vec<Chapter>) -> Result<Self, DictionaryError> {
        if chapters.is_empty() {
            return Err(DictionaryError::Empty);
        }
        for (index, chapter) in chapters.iter_mut().enumerate() {
            if chapter.name.trim().is_empty() {
                chapter.name = format!("Chapter {}", index + 1);
            }
        }
        info!(chapters = chapters.len(), "dictionary loaded");
        Ok(Self { chapters })
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    /// Case-insensitive exact lookup by display name.
    pub fn chapter_by_name(&self, name: &str) -> Option<&Chapter> {
        let name = name.trim();
        self.chapters
            .iter()
            .find(|chapter| chapter.name.eq_ignore_ascii_case(name))
    }
}
