//! Typed access to the remote loan service.
//!
//! Authenticated operations take their bearer token from the session store injected at
//! construction and fail with [`LoanApiClientError::Unauthorized`] without sending anything
//! when there is no session.

use secrecy::SecretString;
use shared_types::VerificationId;

use crate::model::loan::{Loan, LoanDraft};
use crate::model::loan_product::LoanProduct;
use crate::model::notification::Notification;
use crate::model::user::{Credentials, Registration, User};
use crate::model::verification::{Verification, VerificationDraft, VerificationStatus};

pub mod error;
pub mod http_client;

use error::LoanApiClientError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait LoanApiClient: Send + Sync {
    /// Exchanges credentials for a session token, does not store it
    async fn login(&self, credentials: &Credentials) -> Result<SecretString, LoanApiClientError>;

    async fn register(&self, registration: &Registration) -> Result<(), LoanApiClientError>;

    async fn current_user(&self) -> Result<User, LoanApiClientError>;

    async fn list_users(&self) -> Result<Vec<User>, LoanApiClientError>;

    async fn list_loan_products(&self) -> Result<Vec<LoanProduct>, LoanApiClientError>;

    async fn fetch_loans(&self) -> Result<Vec<Loan>, LoanApiClientError>;

    /// Not idempotent, must not be retried
    async fn submit_loan(&self, draft: &LoanDraft) -> Result<Loan, LoanApiClientError>;

    async fn fetch_verifications(&self) -> Result<Vec<Verification>, LoanApiClientError>;

    /// Not idempotent, must not be retried
    async fn submit_verification(
        &self,
        draft: &VerificationDraft,
    ) -> Result<Verification, LoanApiClientError>;

    /// `None` when the server reports no status or one this client does not know
    async fn fetch_verification_status(
        &self,
    ) -> Result<Option<VerificationStatus>, LoanApiClientError>;

    async fn approve_verification(
        &self,
        id: &VerificationId,
    ) -> Result<Verification, LoanApiClientError>;

    async fn reject_verification(
        &self,
        id: &VerificationId,
    ) -> Result<Verification, LoanApiClientError>;

    async fn fetch_notifications(&self) -> Result<Vec<Notification>, LoanApiClientError>;
}
