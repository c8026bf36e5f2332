//! Error types for the Generative UI demo.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenUiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid {key}: '{value}'. Valid values: {expected}")]
    InvalidSetting {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Cannot determine home directory")]
    NoHomeDir,

    #[error("Render error: {0}")]
    Render(String),
}

impl GenUiError {
    /// Process exit code for this error when it reaches `main`
    pub fn exit_code(&self) -> i32 {
        match self {
            GenUiError::Io(_) => 74,
            GenUiError::ConfigParse { .. }
            | GenUiError::ConfigSerialize(_)
            | GenUiError::InvalidSetting { .. }
            | GenUiError::NoHomeDir => 78,
            GenUiError::Render(_) => 70,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenUiError>;
