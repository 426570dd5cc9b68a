//! Error types for the erome-downloader application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Album page errors
    #[error("Host must be {expected} (got '{host}')")]
    UnsupportedHost { host: String, expected: String },

    #[error("HTTP error {status} while fetching album page")]
    PageFetch { status: u16 },

    #[error("Album page has no og:title metadata")]
    MissingTitle,

    #[error("HTML parse error: {0}")]
    Parse(String),

    // Download errors
    #[error("HTTP error {status} while fetching file")]
    FileFetch { status: u16 },

    #[error("Download failed: {0}")]
    Download(String),

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ALBUM_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const FILESYSTEM_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
