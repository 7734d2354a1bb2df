use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use shared_types::VerificationId;

use super::HTTPLoanApiClient;
use super::dto::{
    CreateLoanRequestRestDTO, LoanProductRestDTO, LoanRestDTO, LoginRequestRestDTO,
    LoginResponseRestDTO, NotificationRestDTO, UserRestDTO, VerificationRestDTO,
    VerificationStatusRestDTO,
};
use super::mapper::{execute, parse, parse_list};
use crate::model::loan::{Loan, LoanDraft};
use crate::model::loan_product::LoanProduct;
use crate::model::notification::Notification;
use crate::model::user::{Credentials, Registration, User};
use crate::model::verification::{Verification, VerificationDraft, VerificationStatus};
use crate::provider::http_client::multipart::MultipartForm;
use crate::provider::loan_api_client::LoanApiClient;
use crate::provider::loan_api_client::error::LoanApiClientError;

#[async_trait::async_trait]
impl LoanApiClient for HTTPLoanApiClient {
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    async fn login(&self, credentials: &Credentials) -> Result<SecretString, LoanApiClientError> {
        let request = self
            .http_client
            .post(&self.url("/api/Auth/login"))
            .sensitive()
            .json(LoginRequestRestDTO {
                email: &credentials.email,
                password: credentials.password.expose_secret(),
            })
            .context("json error")
            .map_err(LoanApiClientError::Transport)?;

        let response = parse::<LoginResponseRestDTO>(execute(request).await?)?;
        match response.token {
            Some(token) if !token.is_empty() => Ok(SecretString::from(token)),
            _ => Err(LoanApiClientError::ValidationFailed(
                "Login response contains no token".to_owned(),
            )),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    async fn register(&self, registration: &Registration) -> Result<(), LoanApiClientError> {
        let document = &registration.id_document;
        let form = MultipartForm::new()
            .text("fullName", registration.full_name.as_str())
            .text("email", registration.email.as_str())
            .text("password", registration.password.expose_secret())
            .text("role", registration.role.to_string())
            .text("contact", registration.contact.as_str())
            .file(
                "IdDocument",
                &document.file_name,
                &document.media_type,
                document.content.clone(),
            );

        let request = self
            .http_client
            .post(&self.url("/api/Auth/register"))
            .sensitive()
            .multipart(form);

        execute(request).await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn current_user(&self) -> Result<User, LoanApiClientError> {
        let request = self.authorized(self.http_client.get(&self.url("/api/Users/me")))?;
        parse::<UserRestDTO>(execute(request).await?).map(Into::into)
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn list_users(&self) -> Result<Vec<User>, LoanApiClientError> {
        let request = self.authorized(self.http_client.get(&self.url("/api/Users")))?;
        Ok(parse_list::<UserRestDTO>(execute(request).await?)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn list_loan_products(&self) -> Result<Vec<LoanProduct>, LoanApiClientError> {
        let mut request = self
            .http_client
            .get(&self.url("/api/LoanProduct/products"));
        // public endpoint, the token is attached when there is one
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token.expose_secret());
        }

        Ok(parse_list::<LoanProductRestDTO>(execute(request).await?)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn fetch_loans(&self) -> Result<Vec<Loan>, LoanApiClientError> {
        let request = self.authorized(self.http_client.get(&self.url("/api/Loans")))?;
        Ok(parse_list::<LoanRestDTO>(execute(request).await?)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn submit_loan(&self, draft: &LoanDraft) -> Result<Loan, LoanApiClientError> {
        let request = self
            .authorized(self.http_client.post(&self.url("/api/Loans/borrow")))?
            .json(CreateLoanRequestRestDTO::from(draft))
            .context("json error")
            .map_err(LoanApiClientError::Transport)?;

        parse::<LoanRestDTO>(execute(self.submission(request)).await?).map(Into::into)
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn fetch_verifications(&self) -> Result<Vec<Verification>, LoanApiClientError> {
        let request = self.authorized(self.http_client.get(&self.url("/api/Verification/all")))?;
        Ok(parse_list::<VerificationRestDTO>(execute(request).await?)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    async fn submit_verification(
        &self,
        draft: &VerificationDraft,
    ) -> Result<Verification, LoanApiClientError> {
        let document = &draft.document;
        let form = MultipartForm::new()
            .text("FirstName", draft.first_name.as_str())
            .text("LastName", draft.last_name.as_str())
            .text("DateOfBirth", draft.date_of_birth.as_str())
            .text("IdNumber", draft.id_number.as_str())
            .file(
                "IdDocument",
                &document.file_name,
                &document.media_type,
                document.content.clone(),
            );

        let request = self
            .authorized(self.http_client.post(&self.url("/api/Verification/upload-id")))?
            .multipart(form);

        parse::<VerificationRestDTO>(execute(self.submission(request)).await?).map(Into::into)
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn fetch_verification_status(
        &self,
    ) -> Result<Option<VerificationStatus>, LoanApiClientError> {
        let request =
            self.authorized(self.http_client.get(&self.url("/api/Verification/status")))?;
        let response = execute(request).await?;
        if response.has_empty_body() {
            return Ok(None);
        }

        Ok(parse::<Option<VerificationStatusRestDTO>>(response)?
            .and_then(|status| status.status()))
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn approve_verification(
        &self,
        id: &VerificationId,
    ) -> Result<Verification, LoanApiClientError> {
        self.review_verification(id, "verify").await
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn reject_verification(
        &self,
        id: &VerificationId,
    ) -> Result<Verification, LoanApiClientError> {
        self.review_verification(id, "reject").await
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn fetch_notifications(&self) -> Result<Vec<Notification>, LoanApiClientError> {
        let request = self.http_client.get(&self.url("/api/notifications"));
        Ok(parse_list::<NotificationRestDTO>(execute(request).await?)?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

impl HTTPLoanApiClient {
    async fn review_verification(
        &self,
        id: &VerificationId,
        action: &str,
    ) -> Result<Verification, LoanApiClientError> {
        let request = self
            .authorized(
                self.http_client
                    .put(&self.url(&format!("/api/Verification/{id}/{action}"))),
            )?
            .json(json!({}))
            .context("json error")
            .map_err(LoanApiClientError::Transport)?;

        parse::<VerificationRestDTO>(execute(request).await?).map(Into::into)
    }
}
