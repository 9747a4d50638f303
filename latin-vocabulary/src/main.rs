use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use dictionary::{import, Chapter, Dictionary};
use drill::{evaluate, Evaluation};
use questions::{ask_question, gender_options, render_entry, render_feedback};
use rand::{rngs::StdRng, SeedableRng};
use session::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utilities::{closest_match, input, str_to_bool};

mod questions;
mod session;
mod utilities;

const DEFAULT_WORDS_PATH: &str = "words/words.json";

#[derive(Parser)]
#[command(name = "latin-vocabulary", version, about = "Latin vocabulary drill")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drill the words of one chapter
    Quiz {
        /// Word list in JSON form
        #[arg(long, env = "LATIN_VOCABULARY_WORDS", default_value = DEFAULT_WORDS_PATH)]
        words: PathBuf,

        /// Chapter number or name; asked for when omitted
        #[arg(long)]
        chapter: Option<String>,

        /// Seed for the word order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the chapters of a word list
    Chapters {
        #[arg(long, env = "LATIN_VOCABULARY_WORDS", default_value = DEFAULT_WORDS_PATH)]
        words: PathBuf,
    },

    /// Convert a plain-text word list into JSON
    Convert {
        /// Text word list with CHAPTER headings
        #[arg(long)]
        input: PathBuf,

        /// JSON file to write
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("latin_vocabulary=warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Quiz {
            words,
            chapter,
            seed,
        } => quiz(&words, chapter.as_deref(), seed),
        Commands::Chapters { words } => list_chapters(&words),
        Commands::Convert { input, output } => convert(&input, &output),
    }
}

fn load(path: &Path) -> anyhow::Result<Dictionary> {
    Dictionary::load(path).with_context(|| {
        format!(
            "couldn't load the word list, convert one with `latin-vocabulary convert` \
             or point --words at {}",
            path.display()
        )
    })
}

fn quiz(words: &Path, chapter: Option<&str>, seed: Option<u64>) -> anyhow::Result<()> {
    let dictionary = load(words)?;
    let chapter = match chapter {
        Some(query) => find_chapter(&dictionary, query)
            .with_context(|| format!("no chapter matches {query:?}"))?,
        None => select_chapter(&dictionary)?,
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(chapter = %chapter.name, words = chapter.words.len(), "starting quiz");

    let genders = gender_options(chapter);
    let mut session = Session::new(&chapter.words, &mut rng);
    loop {
        while let Some(entry) = session.current() {
            println!("----------------------------------------");
            println!("{}", session.progress());
            println!("{}", entry.translation);
            let verdict = loop {
                let submission = ask_question(entry, &genders)?;
                match evaluate(&submission, entry) {
                    Evaluation::Scored(verdict) => break verdict,
                    Evaluation::NeedsInput => {
                        println!("Please enter at least one field before checking.")
                    }
                }
            };
            println!("{}", render_feedback(&verdict));
            println!("{}", render_entry(entry));
            session.record(verdict.overall_correct);
        }

        println!("----------------------------------------");
        println!("Quiz Complete!");
        println!("Your Score: {} / {}", session.score(), session.len());
        let again = input("Try again? (y/N): ")?;
        if !str_to_bool(again).unwrap_or(false) {
            break;
        }
        session.restart(&mut rng);
    }
    Ok(())
}

/// Resolves a chapter by 1-based number, exact name, or a close spelling of its name.
fn find_chapter<'a>(dictionary: &'a Dictionary, query: &str) -> Option<&'a Chapter> {
    let query = query.trim();
    if let Ok(number) = query.parse::<usize>() {
        return dictionary.chapter(number.wrapping_sub(1));
    }
    if let Some(chapter) = dictionary.chapter_by_name(query) {
        return Some(chapter);
    }
    let names = dictionary
        .chapters()
        .iter()
        .map(|chapter| chapter.name.as_str())
        .collect::<Vec<&str>>();
    closest_match(&names, query).and_then(|index| dictionary.chapter(index))
}

fn select_chapter(dictionary: &Dictionary) -> anyhow::Result<&Chapter> {
    print_chapters(dictionary);
    loop {
        let answer = input("Choose a chapter: ")?;
        if let Some(chapter) = find_chapter(dictionary, &answer) {
            return Ok(chapter);
        }
        println!("Please select a chapter before starting the quiz.");
    }
}

fn print_chapters(dictionary: &Dictionary) {
    for (index, chapter) in dictionary.chapters().iter().enumerate() {
        println!(
            "[{}]: {} ({} words)",
            index + 1,
            chapter.name,
            chapter.words.len()
        );
    }
}

fn list_chapters(words: &Path) -> anyhow::Result<()> {
    print_chapters(&load(words)?);
    Ok(())
}

fn convert(input: &Path, output: &Path) -> anyhow::Result<()> {
    let chapters = import::import_file(input)?;
    if chapters.is_empty() {
        println!("Warning: No chapters found in the input file.");
        return Ok(());
    }
    import::write_json(&chapters, output)?;
    println!("Successfully converted {} chapters.", chapters.len());
    println!("Output file created: {}", output.display());
    Ok(())
}
