//! Error types shared by the API client and the CLI.
//!
//! The `ClientError` enum separates configuration problems, transport failures and
//! failures reported by the API itself, so a single printed message is enough to
//! tell which layer went wrong.
use std::io;

use thiserror::Error;

/// Unified error type for the quote client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The API key environment variable is unset or blank.
    #[error("Configuration error: {0} is missing from the environment")]
    MissingCredential(String),

    /// The API key cannot be carried in an HTTP header.
    #[error("Configuration error: invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Network, timeout or transport setup failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status other than 200.
    #[error("API error: HTTP status was {0}, expected 200")]
    HttpStatus(u16),

    /// The session endpoint reported an error code in its body.
    #[error("API error: session creation failed ({code}): {message}")]
    SessionEstablishment {
        /// Error code as reported by the API.
        code: String,
        /// Human-readable message from the API, empty when absent.
        message: String,
    },

    /// Response body was not the JSON we expected.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The quote listing came back empty.
    #[error("No quotes found for filter '{filter}'")]
    NoResults {
        /// Filter that produced the empty page.
        filter: String,
    },

    /// Failure while writing quotes to the output.
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}
