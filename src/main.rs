use std::io::{self, BufRead};

use color_eyre::eyre::Context as _;
use color_eyre::Result;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use t9_predictions::config::Config;
use t9_predictions::session::{Response, Session, PROMPT};
use t9_predictions::{predictor, result_formatters};

fn main() -> Result<()> {
    color_eyre::install()?;
    let config = Config::new()?;
    init_tracing(config.verbose);

    let index = predictor::build_index(&config)?;

    if config.dump_trie {
        result_formatters::dump(&config, &index)?;
    }

    if let Some(query) = &config.query {
        let result = index
            .search(query, config.limit)
            .wrap_err_with(|| format!("searching {:?}", query))?;
        return result_formatters::call(&config, &result);
    }

    let mut session = Session::new(&index, config.limit);
    println!("{}", PROMPT);
    for line in io::stdin().lock().lines() {
        let line = line.wrap_err("failed to read query")?;

        match session.handle(&line) {
            Response::Prompt => println!("{}", PROMPT),
            Response::Unchanged => {}
            Response::Predictions(result) => result_formatters::call(&config, &result)?,
            Response::Invalid(error) => warn!("{}", error),
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
