use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum CbError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected, unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// The provider throttled the request (HTTP 429).
    #[error("Rate limited: {url}")]
    RateLimited { url: String },

    /// The provider failed internally (HTTP 5xx).
    #[error("Server error {status} at {url}")]
    ServerError { status: u16, url: String },

    /// The provider answered with an error payload of its own.
    #[error("{provider} error: {message}")]
    Api {
        /// Which provider produced the payload.
        provider: &'static str,
        /// The provider's own error text.
        message: String,
    },

    /// The data received was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A credential needed for the attempted call is missing or unusable.
    #[error("Auth error: {0}")]
    Auth(String),

    /// The process environment does not describe a usable configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// The reference price is zero, so a relative change is undefined.
    #[error("reference price is zero; percentage change is undefined")]
    ZeroReference,
}

/// Maps a non-success HTTP status onto the matching error variant.
pub(crate) fn status_error(status: u16, url: String) -> CbError {
    match status {
        404 => CbError::NotFound { url },
        429 => CbError::RateLimited { url },
        500..=599 => CbError::ServerError { status, url },
        _ => CbError::Status { status, url },
    }
}
