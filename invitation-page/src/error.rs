use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeatureError>;

/// A decorative or form feature could not be set up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    #[error("Unsupported by this viewport: {0}")]
    Unsupported(String),

    #[error("Feature error: {0}")]
    Internal(String),
}
