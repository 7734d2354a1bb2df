use thiserror::Error;

pub mod core_config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parsing error: `{0}`")]
    Parsing(#[from] ConfigParsingError),
    #[error("Validation error: `{0}`")]
    Validation(#[from] ConfigValidationError),
}

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Invalid api base url `{0}`: must be an http(s) origin")]
    InvalidBaseUrl(String),
    #[error("Session storage key must not be empty")]
    EmptyStorageKey,
}
