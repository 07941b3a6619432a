//! Error types for the notice generator

use thiserror::Error;

/// Result type alias for notice operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while collecting input or rendering a notice
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or parse a config file
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A string field name did not match any known form field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Form input ended or failed before the form was complete
    #[error("Form input failed: {0}")]
    InputError(String),

    /// A form session operation was invalid in its current state
    #[error("Form session: {0}")]
    SessionError(String),

    /// Failed to produce or write rendered output
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to fetch an image from a generation service
    #[cfg(feature = "fetch")]
    #[error("Image fetch failed: {0}")]
    FetchError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::FetchError(err.to_string())
    }
}
