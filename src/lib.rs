pub mod config;
pub mod error;
pub mod keypad;
pub mod predictor;
pub mod result_formatters;
pub mod session;
pub mod word_index;
pub mod word_list;

pub use error::PredictError;
pub use word_index::{SearchResult, WordIndex, DEFAULT_LIMIT};
