pub mod json;
pub mod plain;

use color_eyre::Result;

use crate::config::{Config, OutputFormat};
use crate::word_index::{SearchResult, WordIndex};

pub fn call(config: &Config, result: &SearchResult) -> Result<()> {
    let output = match config.output_format {
        OutputFormat::Plain => plain::render(result, config.show_digits),
        OutputFormat::Json => json::render(result)?,
    };

    println!("{}", output);
    Ok(())
}

pub fn dump(config: &Config, index: &WordIndex) -> Result<()> {
    let output = match config.output_format {
        OutputFormat::Plain => plain::render_tree(index),
        OutputFormat::Json => json::render_tree(index)?,
    };

    println!("{}", output);
    Ok(())
}
