// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Unexpected response structure: {0}")]
    UnexpectedResponse(String),

    #[error("Received empty content from model")]
    EmptyResponse,

    #[error("Model output is not valid JSON: {source}")]
    MalformedResponse {
        source: serde_json::Error,
        /// Offending model output, kept for server-side logs only.
        raw: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GenError>;
