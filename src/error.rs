use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Star system error: {0}")]
    System(#[from] SystemError),

    #[error("Unknown body: {0}")]
    UnknownBody(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised while loading or assembling a star system
#[derive(Error, Debug)]
pub enum SystemError {
    #[error("Failed to parse system file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to parse system file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate body key '{0}'")]
    DuplicateKey(String),

    #[error("Body '{body}' refers to unknown parent '{parent}'")]
    UnknownParent { body: String, parent: String },

    #[error("System has no root body")]
    NoRoot,

    #[error("System has more than one root body: '{first}' and '{second}'")]
    MultipleRoots { first: String, second: String },

    #[error("Bodies not reachable from the root (cycle in parent links?): {0:?}")]
    Unreachable(Vec<String>),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, OrreryError>;
