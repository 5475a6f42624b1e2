use std::fmt::{self, Display};

/// Errors produced by model lookups and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownRegion(String),
    InvalidMovieId(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownRegion(code) => {
                write!(f, "unknown language region: {code}")
            }
            ModelError::InvalidMovieId(raw) => {
                write!(f, "invalid movie id: {raw}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
