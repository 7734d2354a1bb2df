use shared_types::VerificationId;

use super::VerificationService;
use super::dto::{ReviewDecision, SubmitVerificationRequestDTO};
use super::validator::validate_submit_request;
use crate::model::verification::{Verification, VerificationDraft, VerificationStatus};
use crate::service::common_mapper::document_from_dto;
use crate::service::error::{BusinessLogicError, ServiceError, ValidationError};

impl VerificationService {
    /// Returns all verification records visible to the logged in user
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn get_verification_list(&self) -> Result<Vec<Verification>, ServiceError> {
        Ok(self
            .retry
            .run("fetch_verifications", || {
                self.loan_api_client.fetch_verifications()
            })
            .await?)
    }

    /// Latest status of the user's own verification, `None` if there is none yet
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn get_verification_status(
        &self,
    ) -> Result<Option<VerificationStatus>, ServiceError> {
        Ok(self
            .retry
            .run("fetch_verification_status", || {
                self.loan_api_client.fetch_verification_status()
            })
            .await?)
    }

    /// Validates the draft locally and submits it exactly once.
    ///
    /// # Arguments
    ///
    /// * `request` - identity fields and the picked identity document, all required
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    pub async fn submit_verification(
        &self,
        request: SubmitVerificationRequestDTO,
    ) -> Result<Verification, ServiceError> {
        validate_submit_request(&request)?;

        let Some(document) = request.id_document else {
            return Err(ValidationError::MissingFields(vec!["IdDocument"]).into());
        };

        let draft = VerificationDraft {
            first_name: request.first_name.trim().to_owned(),
            last_name: request.last_name.trim().to_owned(),
            date_of_birth: request.date_of_birth.trim().to_owned(),
            id_number: request.id_number.trim().to_owned(),
            document: document_from_dto(document)?,
        };

        let verification = self.loan_api_client.submit_verification(&draft).await?;
        tracing::info!(id = %verification.id, status = %verification.status, "Verification submitted");
        Ok(verification)
    }

    /// Admin review of a submitted record. Approved records are final and refused.
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn review_verification(
        &self,
        id: &VerificationId,
        decision: ReviewDecision,
    ) -> Result<Verification, ServiceError> {
        let current = self
            .get_verification_list()
            .await?
            .into_iter()
            .find(|verification| &verification.id == id)
            .ok_or_else(|| BusinessLogicError::VerificationNotFound(id.to_owned()))?;

        if current.is_final() {
            return Err(BusinessLogicError::VerificationAlreadyApproved(id.to_owned()).into());
        }

        let reviewed = match decision {
            ReviewDecision::Approve => self.loan_api_client.approve_verification(id).await?,
            ReviewDecision::Reject => self.loan_api_client.reject_verification(id).await?,
        };

        tracing::info!(%id, status = %reviewed.status, "Verification reviewed");
        Ok(reviewed)
    }
}
