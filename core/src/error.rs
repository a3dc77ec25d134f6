use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No clue at this address")]
    InvalidAddress,
}

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Could not reach the clue service: {0}")]
    Network(String),
    #[error("Unexpected response from the clue service: {0}")]
    Decode(String),
    #[error("Needed {requested} distinct categories but only {available} are available")]
    NotEnoughCategories { requested: usize, available: usize },
}

pub type FetchResult<T> = core::result::Result<T, FetchError>;
