use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse gallery document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no image with file id {0}")]
    NotFound(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
