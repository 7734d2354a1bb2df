use std::sync::Arc;

use crate::proto::session_store::SessionStore;
use crate::provider::loan_api_client::LoanApiClient;

pub mod dto;
pub mod service;
mod validator;

#[derive(Clone)]
pub struct AuthService {
    loan_api_client: Arc<dyn LoanApiClient>,
    session: Arc<SessionStore>,
}

impl AuthService {
    pub fn new(loan_api_client: Arc<dyn LoanApiClient>, session: Arc<SessionStore>) -> Self {
        Self {
            loan_api_client,
            session,
        }
    }
}

#[cfg(test)]
mod test;
