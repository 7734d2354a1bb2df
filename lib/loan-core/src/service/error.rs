use itertools::Itertools;
use rust_decimal::Decimal;
use shared_types::VerificationId;
use thiserror::Error;

use crate::config::ConfigError;
use crate::provider::loan_api_client::error::LoanApiClientError;
use crate::service::workflow::dto::WorkflowStep;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    LoanApi(#[from] LoanApiClientError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),
    #[error("Config error: `{0}`")]
    Config(#[from] ConfigError),
    #[error("Mapping error: `{0}`")]
    MappingError(String),
}

/// Draft rejected before anything is sent
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.iter().join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid loan amount `{0}`, must be greater than zero")]
    InvalidAmount(Decimal),
    #[error("Password does not meet the strength requirements")]
    WeakPassword,
    #[error("Invalid media type `{0}`")]
    InvalidMediaType(String),
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("Workflow is not active")]
    WorkflowInactive,
    #[error("Operation requires workflow step {expected:?}")]
    InvalidWorkflowStep { expected: WorkflowStep },
    #[error("Verification `{0}` is already approved")]
    VerificationAlreadyApproved(VerificationId),
    #[error("Verification `{0}` not found")]
    VerificationNotFound(VerificationId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Auth001,
    Auth002,

    Validation001,
    Validation002,
    Validation003,
    Validation004,

    Workflow001,
    Workflow002,

    Verification001,
    Verification002,

    Api001,
    Api002,
    Api003,
    Api004,

    Config,
    ResponseMapping,

    Unmapped,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::Auth001 => "Not logged in or session expired",
            ErrorCode::Auth002 => "Password too weak",

            ErrorCode::Validation001 => "Missing required fields",
            ErrorCode::Validation002 => "Invalid loan amount",
            ErrorCode::Validation003 => "Rejected by server validation",
            ErrorCode::Validation004 => "Invalid document media type",

            ErrorCode::Workflow001 => "Workflow not active",
            ErrorCode::Workflow002 => "Invalid workflow step",

            ErrorCode::Verification001 => "Verification already approved",
            ErrorCode::Verification002 => "Verification not found",

            ErrorCode::Api001 => "Resource not found",
            ErrorCode::Api002 => "Network error",
            ErrorCode::Api003 => "Server error",
            ErrorCode::Api004 => "Transport error",

            ErrorCode::Config => "Configuration error",
            ErrorCode::ResponseMapping => "Response mapping error",

            ErrorCode::Unmapped => "Unmapped error code",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::LoanApi(error) => error_code_for_api(error),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::Config(_) => ErrorCode::Config,
            ServiceError::MappingError(_) => ErrorCode::ResponseMapping,
        }
    }

    /// Message for the user facing notice of a failed operation
    pub fn reason(&self) -> String {
        match self {
            ServiceError::LoanApi(LoanApiClientError::ValidationFailed(message)) => {
                message.to_owned()
            }
            other => other.error_code().msg().to_owned(),
        }
    }
}

fn error_code_for_api(error: &LoanApiClientError) -> ErrorCode {
    match error {
        LoanApiClientError::Unauthorized => ErrorCode::Auth001,
        LoanApiClientError::NotFound => ErrorCode::Api001,
        LoanApiClientError::ValidationFailed(_) => ErrorCode::Validation003,
        LoanApiClientError::NetworkError(_) => ErrorCode::Api002,
        LoanApiClientError::ServerError { .. } => ErrorCode::Api003,
        LoanApiClientError::Transport(_) => ErrorCode::Api004,
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingFields(_) => ErrorCode::Validation001,
            ValidationError::InvalidAmount(_) => ErrorCode::Validation002,
            ValidationError::WeakPassword => ErrorCode::Auth002,
            ValidationError::InvalidMediaType(_) => ErrorCode::Validation004,
        }
    }
}

impl BusinessLogicError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BusinessLogicError::WorkflowInactive => ErrorCode::Workflow001,
            BusinessLogicError::InvalidWorkflowStep { .. } => ErrorCode::Workflow002,
            BusinessLogicError::VerificationAlreadyApproved(_) => ErrorCode::Verification001,
            BusinessLogicError::VerificationNotFound(_) => ErrorCode::Verification002,
        }
    }
}
