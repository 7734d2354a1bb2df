use loan_core::model::verification::{Verification, VerificationStatus};
use loan_core::service::verification::dto::{ReviewDecision, SubmitVerificationRequestDTO};
use one_dto_mapper::{From, Into};
use shared_types::VerificationId;

use super::LoanCoreBinding;
use super::auth::DocumentBindingDTO;
use crate::error::BindingError;
use crate::utils::format_timestamp_opt;

#[uniffi::export(async_runtime = "tokio")]
impl LoanCoreBinding {
    #[uniffi::method]
    pub async fn get_verifications(&self) -> Result<Vec<VerificationBindingDTO>, BindingError> {
        let core = self.use_core().await?;
        Ok(core
            .verification_service
            .get_verification_list()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// `None` when the user never submitted
    #[uniffi::method]
    pub async fn get_verification_status(
        &self,
    ) -> Result<Option<VerificationStatusBindingEnum>, BindingError> {
        let core = self.use_core().await?;
        Ok(core
            .verification_service
            .get_verification_status()
            .await?
            .map(Into::into))
    }

    /// Admin decision on a submitted verification
    #[uniffi::method]
    pub async fn review_verification(
        &self,
        verification_id: String,
        decision: ReviewDecisionBindingEnum,
    ) -> Result<VerificationBindingDTO, BindingError> {
        let core = self.use_core().await?;
        Ok(core
            .verification_service
            .review_verification(&VerificationId::from(verification_id), decision.into())
            .await?
            .into())
    }
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct SubmitVerificationRequestBindingDTO {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub id_number: String,
    pub id_document: Option<DocumentBindingDTO>,
}

impl From<SubmitVerificationRequestBindingDTO> for SubmitVerificationRequestDTO {
    fn from(value: SubmitVerificationRequestBindingDTO) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            date_of_birth: value.date_of_birth,
            id_number: value.id_number,
            id_document: value.id_document.map(Into::into),
        }
    }
}

#[derive(Clone, Debug, From, uniffi::Record)]
#[from(Verification)]
pub struct VerificationBindingDTO {
    #[from(with_fn_ref = "ToString::to_string")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub id_number: String,
    pub status: VerificationStatusBindingEnum,
    #[from(with_fn_ref = format_timestamp_opt)]
    pub created_at: Option<String>,
    #[from(with_fn_ref = format_timestamp_opt)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, From, uniffi::Enum)]
#[from(VerificationStatus)]
pub enum VerificationStatusBindingEnum {
    NotSubmitted,
    Pending,
    Approved,
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Into, uniffi::Enum)]
#[into(ReviewDecision)]
pub enum ReviewDecisionBindingEnum {
    Approve,
    Reject,
}
