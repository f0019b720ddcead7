use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedwheelError {
    #[error("Source list unavailable at {}: {source}", path.display())]
    SourceListUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported address: {0}")]
    UnsupportedAddress(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl FeedwheelError {
    /// Short text for the status line.
    pub fn status_message(&self) -> String {
        match self {
            FeedwheelError::SourceListUnavailable { path, source }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                format!("Error: {} not found", path.display())
            }
            other => format!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedwheelError>;
