//! Error types for the CLI.

use std::path::PathBuf;

/// All errors that can occur while running a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid risk parameters: {0}")]
    Params(#[from] levguard::ParamsError),

    #[error("invalid argument: {0}")]
    Argument(String),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
