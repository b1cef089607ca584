use crate::error::PredictError;
use crate::word_index::{SearchResult, WordIndex};

pub const PROMPT: &str = "Please type a number to begin";

#[derive(Debug, PartialEq, Eq)]
pub enum Response {
    /// Nothing typed yet.
    Prompt,
    /// Same input as the previous query.
    Unchanged,
    Predictions(SearchResult),
    Invalid(PredictError),
}

/// Turns successive keypad inputs into predictions, skipping repeats.
pub struct Session<'a> {
    index: &'a WordIndex,
    limit: usize,
    last_input: String,
}

impl<'a> Session<'a> {
    pub fn new(index: &'a WordIndex, limit: usize) -> Self {
        Self {
            index,
            limit,
            last_input: String::new(),
        }
    }

    pub fn handle(&mut self, input: &str) -> Response {
        let input = input.trim();
        if input.is_empty() {
            self.last_input.clear();
            return Response::Prompt;
        }
        if input == self.last_input {
            return Response::Unchanged;
        }
        self.last_input = input.to_string();

        match self.index.search(input, self.limit) {
            Ok(result) => Response::Predictions(result),
            Err(error) => Response::Invalid(error),
        }
    }
}
