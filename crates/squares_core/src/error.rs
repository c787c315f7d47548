use thiserror::Error;

/// Errors raised while building or decoding board data.
///
/// The winner engine itself never fails; these only surface at the
/// construction boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),

    #[error("Invalid square count: expected {expected}, found {found}")]
    InvalidSquareCount { expected: usize, found: usize },

    #[error("Invalid cell position: row {row}, col {col}")]
    InvalidCell { row: usize, col: usize },

    #[error("Malformed coordinate key: {0:?}")]
    InvalidCoordinateKey(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Invalid board: {0}")]
    Board(#[from] BoardError),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ApiError::Deserialization(err.to_string())
        } else {
            ApiError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
