use std::sync::Arc;

use crate::proto::retry::RetryPolicy;
use crate::provider::loan_api_client::LoanApiClient;

pub mod service;

#[derive(Clone)]
pub struct UserService {
    loan_api_client: Arc<dyn LoanApiClient>,
    retry: RetryPolicy,
}

impl UserService {
    pub fn new(loan_api_client: Arc<dyn LoanApiClient>, retry: RetryPolicy) -> Self {
        Self {
            loan_api_client,
            retry,
        }
    }
}

#[cfg(test)]
mod test;
