use std::path::PathBuf;

use clap::builder::{styling, Styles};
use clap::{Parser, ValueEnum};

use color_eyre::eyre::Context as _;
use color_eyre::Result;
use regex::Regex;

use crate::word_index::DEFAULT_LIMIT;
use crate::word_list;

const CLAP_STYLING: Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Blue.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

pub struct Config {
    pub words: Vec<PathBuf>,
    pub separator: Regex,
    pub take: usize,
    pub limit: usize,
    pub output_format: OutputFormat,
    pub query: Option<String>,
    pub dump_trie: bool,
    pub show_digits: bool,
    pub progress: bool,
    pub verbose: u8,
}

/// Predicts words from numeric keypad digit sequences.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, styles = CLAP_STYLING)]
pub struct Args {
    /// Maximum number of word lists read at the same time. [default: number of logical CPUs]
    #[arg(short, long, default_value_t = num_cpus::get())]
    concurrency: usize,
    /// Shows the keypad digits next to each predicted word.
    #[arg(long)]
    digits: bool,
    /// Prints the structure of the word index after loading.
    #[arg(long)]
    dump_trie: bool,
    /// Output format.
    #[arg(short, long, default_value = "plain")]
    format: OutputFormat,
    /// Maximum number of predictions per query.
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,
    /// Shows progress while reading word lists.
    #[arg(short, long)]
    progress: bool,
    /// Runs a single query instead of reading queries from stdin.
    #[arg(short, long)]
    query: Option<String>,
    /// Characters separating the word from the rest of a word list line.
    #[arg(short, long, default_value = " \t,")]
    separators: String,
    /// Number of words taken from the top of each word list.
    #[arg(short, long, default_value_t = 100)]
    take: usize,
    /// Increases log verbosity, can be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// List of word list files, one word per line.
    #[arg(short, long, required = true, value_delimiter = ',')]
    words: Vec<PathBuf>,
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();

        rayon::ThreadPoolBuilder::new()
            .num_threads(args.concurrency)
            .build_global()
            .wrap_err("failed to build thread pool")?;

        Self::from_args(args)
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let separator =
            word_list::separators_regex(&args.separators).wrap_err("failed to parse separators")?;

        Ok(Self {
            words: args.words,
            separator,
            take: args.take,
            limit: args.limit,
            output_format: args.format,
            query: args.query,
            dump_trie: args.dump_trie,
            show_digits: args.digits,
            progress: args.progress,
            verbose: args.verbose,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}
