use thiserror::Error;

#[derive(Debug, Error)]
pub enum SanamanaError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Malformed record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Authentication failed: {0}")]
    Auth(String),
}

impl From<SanamanaError> for String {
    fn from(err: SanamanaError) -> Self {
        err.to_string()
    }
}

pub type Result<T> = std::result::Result<T, SanamanaError>;
