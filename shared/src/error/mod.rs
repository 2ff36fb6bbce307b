use thiserror::Error;

use crate::models::FieldName;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The outbound request never completed. `message` is the localized
    /// text shown to the guest, `cause` the underlying transport error.
    #[error("Transport error: {cause}")]
    Transport { message: String, cause: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Required fields were missing from the submitted form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (missing: {})", format_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<FieldName>,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing configuration value: {0}")]
    Missing(String),

    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: String, reason: String },

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

fn format_fields(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// Helper function to map reqwest errors raised while dispatching
pub fn map_transport_error(message: &str, err: reqwest::Error) -> ServiceError {
    let kind = if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connect"
    } else if err.is_request() {
        "request"
    } else {
        "transport"
    };
    ServiceError::Transport {
        message: message.to_string(),
        cause: format!("{} error: {}", kind, err),
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::InternalError(format!("JSON serialization error: {}", err))
    }
}
