use dictionary::DictionaryEntry;
use rand::{seq::SliceRandom, Rng};

/// One pass through a chapter in random order.
pub struct Session<'a> {
    words: Vec<&'a DictionaryEntry>,
    index: usize,
    score: usize,
}

impl<'a> Session<'a> {
    pub fn new<R: Rng + ?Sized>(words: &'a [DictionaryEntry], rng: &mut R) -> Self {
        let mut words = words.iter().collect::<Vec<_>>();
        words.shuffle(rng);
        Self {
            words,
            index: 0,
            score: 0,
        }
    }

    pub fn current(&self) -> Option<&'a DictionaryEntry> {
        self.words.get(self.index).copied()
    }

    /// Moves on to the next word.
    pub fn record(&mut self, correct: bool) {
        if self.current().is_none() {
            return;
        }
        if correct {
            self.score += 1;
        }
        self.index += 1;
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Words answered so far, as shown above each question.
    pub fn progress(&self) -> String {
        let done = self.index.min(self.words.len());
        let percent = if self.words.is_empty() {
            100
        } else {
            done * 100 / self.words.len()
        };
        format!("Word {done} of {} ({percent}%)", self.words.len())
    }

    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.words.shuffle(rng);
        self.index = 0;
        self.score = 0;
    }
}
