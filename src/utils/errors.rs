use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    HttpRequestError(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Catalog API returned HTTP {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
