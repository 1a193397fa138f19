use std::io;
use thiserror::Error;

/// Enumerates the possible errors that can arise while querying a Philomena imageboard.
///
/// An empty result page is not an error. [`get`](crate::imageboards::ImageSource::get)
/// reports it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// An error occurred during the network request, including non-success status codes.
    /// Wraps an underlying `reqwest::Error`.
    #[error("Connection Error: {0}")]
    ConnectionError(#[from] reqwest::Error),

    /// The search response could not be deserialized.
    #[error("Error while deserializing JSON: {0}")]
    JsonSerializeFail(#[from] serde_json::Error),

    /// The configured endpoint is not a valid base URL.
    #[error("Invalid imageboard endpoint: {url}")]
    InvalidEndpoint { url: String },
}

/// Errors raised while loading or validating a [`PhilomenaConfig`](crate::config::PhilomenaConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file: {source}")]
    FileIOError {
        #[from]
        source: io::Error,
    },

    #[error("Failed to decode config file {path}: {message}")]
    DecodeError { path: String, message: String },

    #[error("Endpoint must be an absolute http(s) URL, got: {url}")]
    InvalidEndpoint { url: String },

    #[error("Could not determine the config directory for this platform")]
    NoConfigDir,
}
