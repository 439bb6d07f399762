use thiserror::Error;

#[derive(Error, Debug)]
pub enum HintforgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Sink(#[from] hintforge_api::SinkError),
}

pub type Result<T> = std::result::Result<T, HintforgeError>;
