use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Unknown input: {0}")]
    UnknownInput(String),
}
