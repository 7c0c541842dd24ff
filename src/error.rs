use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloverMergeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error at position {position}: {source}")]
    Xml {
        source: quick_xml::Error,
        position: usize,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No coverage files found matching pattern: {0}")]
    NoFilesMatched(String),

    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
}

pub type Result<T> = std::result::Result<T, CloverMergeError>;
