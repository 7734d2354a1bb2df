use std::sync::Arc;

use crate::proto::retry::RetryPolicy;
use crate::provider::loan_api_client::LoanApiClient;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct NotificationService {
    loan_api_client: Arc<dyn LoanApiClient>,
    retry: RetryPolicy,
}

impl NotificationService {
    pub fn new(loan_api_client: Arc<dyn LoanApiClient>, retry: RetryPolicy) -> Self {
        Self {
            loan_api_client,
            retry,
        }
    }
}
