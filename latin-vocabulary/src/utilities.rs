use std::io::{self, Write};

use drill::macron;

pub fn input(prompt: &str) -> io::Result<String> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "standard input was closed",
        ));
    }
    Ok(line)
}

/// Reads a line of Latin with macron shorthand already rewritten.
pub fn input_latin(prompt: &str) -> io::Result<String> {
    let line = input(prompt)?;
    let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
    // a line is typed in one go, so the cursor sits at its end
    Ok(macron::transform_str(line, line.chars().count()).text)
}

pub fn str_to_bool(mut str: String) -> Option<bool> {
    str.make_ascii_lowercase();
    match str.trim() {
        "y" | "yes" | "yeah" | "yea" | "true" | "on" => Some(true),
        "n" | "no" | "nope" | "false" | "off" => Some(false),
        _ => None,
    }
}

/// Index of the option the typed text unambiguously refers to.
pub fn closest_match<S: AsRef<str>>(options: &[S], typed: &str) -> Option<usize> {
    let typed = typed.trim().to_lowercase();
    let mut scores = options
        .iter()
        .enumerate()
        .map(|(index, option)| (index, strsim::jaro(&option.as_ref().to_lowercase(), &typed)))
        .collect::<Vec<(usize, f64)>>();
    // most similar at the start
    scores.sort_unstable_by(|(_, a), (_, b)| b.total_cmp(a));
    let (best, best_score) = *scores.first()?;
    let runner_up = scores.get(1).map_or(0.0, |(_, score)| *score);
    if best_score == 1.0 || (best_score > 0.9 && best_score - runner_up > 0.25) {
        Some(best)
    } else {
        None
    }
}
