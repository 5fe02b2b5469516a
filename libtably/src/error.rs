//! Error types for Tably

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TablyError>;

#[derive(Error, Debug)]
pub enum TablyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {code} for {endpoint}")]
    Status { endpoint: String, code: u16 },
}
