use loan_core::config::{ConfigError, ConfigParsingError};
use loan_core::provider::session_storage::SessionStorageError;
use loan_core::service::error::{ErrorCode, ServiceError};
use thiserror::Error;

#[derive(Debug, Error, uniffi::Error)]
pub enum BindingError {
    /// `code` is the stable [`ErrorCode`] name, `message` is meant for the user
    #[error("{code}: {message} ({cause})")]
    ErrorResponse {
        code: String,
        message: String,
        cause: String,
    },
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
    #[error("Config validation error: {reason}")]
    ConfigValidationError { reason: String },
    #[error("Core uninitialized")]
    Uninitialized,
}

fn code_name(code: ErrorCode) -> String {
    format!("{code:?}")
}

impl From<ServiceError> for BindingError {
    fn from(error: ServiceError) -> Self {
        match &error {
            ServiceError::Config(error) => Self::ConfigValidationError {
                reason: error.to_string(),
            },
            _ => Self::ErrorResponse {
                code: code_name(error.error_code()),
                message: error.reason(),
                cause: error.to_string(),
            },
        }
    }
}

impl From<ConfigParsingError> for BindingError {
    fn from(error: ConfigParsingError) -> Self {
        Self::ConfigValidationError {
            reason: error.to_string(),
        }
    }
}

impl From<ConfigError> for BindingError {
    fn from(error: ConfigError) -> Self {
        Self::ConfigValidationError {
            reason: error.to_string(),
        }
    }
}

#[derive(Debug, Error, uniffi::Error)]
pub enum NativeStorageError {
    #[error("Storage failure: {reason}")]
    Failure { reason: String },
}

impl From<uniffi::UnexpectedUniFFICallbackError> for NativeStorageError {
    fn from(e: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::Failure {
            reason: e.to_string(),
        }
    }
}

impl From<NativeStorageError> for SessionStorageError {
    fn from(error: NativeStorageError) -> Self {
        Self::Native(error.to_string())
    }
}
