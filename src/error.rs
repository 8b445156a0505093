use thiserror::Error;

#[derive(Error, Debug)]
pub enum LandingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Browser error: {0}")]
    BrowserError(String),
}

pub type Result<T> = std::result::Result<T, LandingError>;
