use crate::format::SecsFormat;
use thiserror::Error;

/// Main error type for SECS-II item operations
#[derive(Error, Debug)]
pub enum SecsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("This is not a List.")]
    NotAList,

    #[error("This is a List, not a scalar.")]
    NotAScalar,

    #[error("{format:?} value requested with incompatible type {requested}")]
    TypeMismatch {
        requested: &'static str,
        format: SecsFormat,
    },

    #[error("{format:?} item is empty")]
    EmptyValue { format: SecsFormat },

    #[error("Item length {length} exceeds the 3-byte length field")]
    LengthOverflow { length: usize },

    #[error("Unknown format code: 0o{0:02o}")]
    UnknownFormat(u8),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for SECS-II item operations
pub type SecsResult<T> = Result<T, SecsError>;
