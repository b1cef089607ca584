use std::time::Instant;

use color_eyre::eyre::Context as _;
use color_eyre::Result;
use tracing::{debug, info};

use crate::config::Config;
use crate::word_index::WordIndex;
use crate::word_list;

/// Reads every configured word list and inserts them in command line order.
pub fn build_index(config: &Config) -> Result<WordIndex> {
    let now = Instant::now();

    let lists = word_list::load(&config.words, &config.separator, config.take, config.progress)
        .wrap_err("failed to load word lists")?;

    let mut index = WordIndex::new();
    for list in lists.iter() {
        debug!(path = %list.path.display(), words = list.words.len(), "inserting word list");
        index.insert_all(&list.words);
    }

    info!(
        sources = lists.len(),
        words = index.word_count(),
        took = %humantime::format_duration(now.elapsed()),
        "word index ready"
    );

    Ok(index)
}
