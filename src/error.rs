use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    #[error("invalid keypad digit {0:?}, expected one of 0-9")]
    InvalidDigit(char),
}
