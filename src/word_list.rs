use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("failed to read word list {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid separators {0:?}")]
    Separators(String),
}

/// Words read from one source, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    pub path: PathBuf,
    pub words: Vec<String>,
}

/// Builds the regex matching the column separators of a word list line.
pub fn separators_regex(separators: &str) -> Result<Regex, WordListError> {
    if separators.is_empty() {
        return Err(WordListError::Separators(separators.to_string()));
    }

    Regex::new(&format!("[{}]+", regex::escape(separators)))
        .map_err(|_| WordListError::Separators(separators.to_string()))
}

/// Keeps the first column of every non-empty line, lowercased, up to
/// `take` words.
pub fn parse(text: &str, separator: &Regex, take: usize) -> Vec<String> {
    text.lines()
        .filter_map(|line| separator.split(line.trim()).next())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .take(take)
        .collect()
}

pub fn read(path: &Path, separator: &Regex, take: usize) -> Result<WordList, WordListError> {
    let text = fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(WordList {
        path: path.to_path_buf(),
        words: parse(&text, separator, take),
    })
}

/// Reads every source in parallel. Lists come back in the order of `paths`.
pub fn load(
    paths: &[PathBuf],
    separator: &Regex,
    take: usize,
    progress: bool,
) -> Result<Vec<WordList>, WordListError> {
    let bar = if progress {
        ProgressBar::new(paths.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {wide_bar} {pos}/{len} word lists")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let lists = paths
        .par_iter()
        .map(|path| {
            let list = read(path, separator, take);
            bar.inc(1);
            list
        })
        .collect::<Result<Vec<WordList>, WordListError>>();

    bar.finish_and_clear();
    lists
}
