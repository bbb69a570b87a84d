use thiserror::Error;

pub type Result<T> = std::result::Result<T, HotscanError>;

#[derive(Error, Debug)]
pub enum HotscanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Cache error: {0}")]
    Cache(String),
}
