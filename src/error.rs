use thiserror::Error;

/// Failures at the edges of the viewer: config and category names.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("invalid viewer config: {0}")]
    InvalidConfig(String),
    #[error("malformed viewer config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
