use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading the podcast configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON in {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config field '{field}' must not be empty")]
    EmptyField { field: &'static str },
}

/// Errors that can occur when scanning the episode directory
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Episode directory does not exist: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file metadata for {path}: {source}")]
    FileMetadataFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Errors that can occur when building or writing the feed document
#[derive(Error, Debug)]
pub enum SerializeError {
    #[error("Channel field '{field}' is missing at serialization time")]
    MissingChannelField { field: &'static str },

    #[error("Generated feed failed validation: {0}")]
    Invalid(#[from] rss::validation::ValidationError),

    #[error("Invalid hosting base URL 'https://{host}/': {source}")]
    InvalidBaseUrl {
        host: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to serialize feed XML: {0}")]
    XmlWriteFailed(#[from] rss::Error),

    #[error("Failed to write feed file {path}: {source}")]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to finalize feed file {path}: {source}")]
    FinalizeFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level errors for feed generation
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] SerializeError),

    #[error("No audio episodes found in {0}")]
    NoEpisodesFound(PathBuf),
}
