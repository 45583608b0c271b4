use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoodnessError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data Unavailable: could not read '{}': {source}", path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid Table Size: {0} is not a power of two")]
    InvalidTableSize(usize),

    #[error("Invalid Code: record {line} holds '{value}', expected an integer")]
    InvalidCode { line: usize, value: String },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Unknown Mode: '{0}'")]
    UnknownMode(String),
}

pub type GdResult<T> = Result<T, GoodnessError>;
