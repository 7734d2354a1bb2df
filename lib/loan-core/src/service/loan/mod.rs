use std::sync::Arc;

use crate::proto::retry::RetryPolicy;
use crate::provider::loan_api_client::LoanApiClient;

pub mod dto;
pub mod service;
mod validator;
pub mod view_model;

#[derive(Clone)]
pub struct LoanService {
    loan_api_client: Arc<dyn LoanApiClient>,
    retry: RetryPolicy,
}

impl LoanService {
    pub fn new(loan_api_client: Arc<dyn LoanApiClient>, retry: RetryPolicy) -> Self {
        Self {
            loan_api_client,
            retry,
        }
    }
}
