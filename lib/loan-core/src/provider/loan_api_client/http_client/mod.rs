use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

use super::error::LoanApiClientError;
use crate::config::core_config::CoreConfig;
use crate::proto::session_store::SessionStore;
use crate::provider::http_client::{HttpClient, RequestBuilder};

mod dto;
mod mapper;
mod provider;

const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

pub struct HTTPLoanApiClient {
    http_client: Arc<dyn HttpClient>,
    session: Arc<SessionStore>,
    base_url: String,
    idempotency_keys: bool,
}

impl HTTPLoanApiClient {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        session: Arc<SessionStore>,
        config: &CoreConfig,
    ) -> Self {
        Self {
            http_client,
            session,
            base_url: config.api_url(""),
            idempotency_keys: config.submission.idempotency_keys,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn bearer_token(&self) -> Result<SecretString, LoanApiClientError> {
        self.session.token().ok_or_else(|| {
            tracing::debug!("No session token, request not sent");
            LoanApiClientError::Unauthorized
        })
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, LoanApiClientError> {
        let token = self.bearer_token()?;
        Ok(request.bearer_auth(token.expose_secret()))
    }

    /// One fresh key per submission attempt
    fn submission(&self, request: RequestBuilder) -> RequestBuilder {
        if self.idempotency_keys {
            request.header(IDEMPOTENCY_KEY_HEADER, &Uuid::new_v4().to_string())
        } else {
            request
        }
    }
}

#[cfg(test)]
mod test;
