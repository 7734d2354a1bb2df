use std::sync::Arc;

use crate::proto::retry::RetryPolicy;
use crate::provider::loan_api_client::LoanApiClient;

pub mod dto;
pub mod service;
pub(crate) mod validator;

#[derive(Clone)]
pub struct VerificationService {
    loan_api_client: Arc<dyn LoanApiClient>,
    retry: RetryPolicy,
}

impl VerificationService {
    pub fn new(loan_api_client: Arc<dyn LoanApiClient>, retry: RetryPolicy) -> Self {
        Self {
            loan_api_client,
            retry,
        }
    }
}

#[cfg(test)]
mod test;
