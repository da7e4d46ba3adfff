use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the subport library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Config file could not be located at the resolved path.
    #[error("config file not found at {path}; create it from config.json.example")]
    ConfigNotFound { path: PathBuf },

    /// Config file exists but is not a JSON object of string values.
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A required key was absent (or blank) in the config file.
    #[error("missing required key in config: {key}")]
    MissingConfigKey { key: &'static str },

    /// The subscription file could not be opened or read.
    #[error("failed to read subscription file {path}: {source}")]
    SubscriptionFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The subscription file is not a JSON array of strings.
    #[error("subscription file {path} is not a JSON array of names: {source}")]
    SubscriptionFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The remote platform rejected the supplied credentials.
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// A remote call completed but the platform reported an error.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// A remote call succeeded at the HTTP level but the body carried errors.
    #[error("{message}")]
    Rejected { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Raised when a temporary file could not replace its destination.
    #[error(transparent)]
    Persist(#[from] tempfile::PersistError),
}
