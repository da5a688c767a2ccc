/*!
 * Error types for the transcritic application.
 *
 * The inference gateway never returns these as `Err` to the pipeline; a failed
 * call is an `InferenceOutcome::Failure` tagged with an [`ErrorKind`]. The
 * types here give that tag a name, let callers that prefer `?` convert an
 * outcome into a `Result`, and cover startup failures (configuration, HTTP
 * client construction) that happen before any request is served.
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single gateway call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The endpoint did not answer within the configured timeout
    Timeout,
    /// The transport could not reach the endpoint
    ConnectionError,
    /// The endpoint answered with a status of 400 or above
    RemoteError,
    /// Success status, but the body was not JSON or lacked the `response` field
    MalformedResponse,
    /// Anything else that went wrong during the call
    UnknownError,
}

impl ErrorKind {
    /// Message shown to the end user when a call fails with this kind.
    ///
    /// Remote and malformed responses deliberately share wording; the raw
    /// body only goes to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Timeout => "the service did not respond in time, please try again later",
            Self::ConnectionError => "could not connect to the service, check the network and the endpoint",
            Self::RemoteError | Self::MalformedResponse => "the service returned an unusable response",
            Self::UnknownError => "an unexpected error occurred while contacting the service",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Timeout => "timeout",
            Self::ConnectionError => "connection error",
            Self::RemoteError => "remote error",
            Self::MalformedResponse => "malformed response",
            Self::UnknownError => "unknown error",
        };
        write!(f, "{}", name)
    }
}

/// Error form of a failed inference call
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Inference call failed ({kind}): {detail}")]
pub struct InferenceError {
    /// Failure discriminator
    pub kind: ErrorKind,
    /// Diagnostic detail (status and body, transport message, ...)
    pub detail: String,
}

/// Errors raised while validating configuration values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The endpoint is not an http(s) URL
    #[error("Invalid API endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// The configured endpoint
        endpoint: String,
        /// Why it was rejected
        reason: String,
    },

    /// Live mode needs a bearer credential
    #[error("API key is required when mocks are disabled")]
    MissingApiKey,

    /// No target language could ever pass validation
    #[error("At least one supported language must be configured")]
    NoSupportedLanguages,

    /// A numeric setting that must be positive was zero
    #[error("Configuration value '{0}' must be greater than zero")]
    ZeroValue(&'static str),
}

/// Main application error type for startup and host code
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string())
    }
}
