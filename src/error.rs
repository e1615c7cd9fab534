use thiserror::Error;

use crate::network::HttpMethod;

/// Failure to turn an endpoint into a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("method {method} is not allowed for endpoint `{endpoint}`")]
    MethodNotAllowed {
        endpoint: &'static str,
        method: HttpMethod,
    },

    #[error("missing path parameter `{name}` in template `{template}`")]
    MissingParameter { template: String, name: String },
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),
}
