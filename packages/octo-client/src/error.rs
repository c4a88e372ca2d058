use thiserror::Error;

pub type Result<T> = std::result::Result<T, OctoError>;

#[derive(Debug, Error)]
pub enum OctoError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Api { status: u16, message: String },

    #[error("Profile data missing from response")]
    MissingData,

    #[error("Failed to decode profiles: {0}")]
    Decode(#[from] serde_json::Error),
}
