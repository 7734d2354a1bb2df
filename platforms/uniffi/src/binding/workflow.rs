use loan_core::service::loan::dto::CreateLoanRequestDTO;
use loan_core::service::workflow::dto::{WorkflowState, WorkflowStep};
use one_dto_mapper::From;

use super::LoanCoreBinding;
use super::loan::{CreateLoanRequestBindingDTO, LoanBindingDTO};
use super::verification::{SubmitVerificationRequestBindingDTO, VerificationBindingDTO};
use crate::error::BindingError;

#[uniffi::export(async_runtime = "tokio")]
impl LoanCoreBinding {
    /// Loan application screen became visible, resolves the starting step.
    #[uniffi::method]
    pub async fn activate_workflow(&self) -> Result<WorkflowStateBindingEnum, BindingError> {
        let core = self.use_core().await?;
        Ok(core.workflow.activate().await.into())
    }

    #[uniffi::method]
    pub async fn deactivate_workflow(&self) -> Result<(), BindingError> {
        let core = self.use_core().await?;
        core.workflow.deactivate();
        Ok(())
    }

    #[uniffi::method]
    pub async fn get_workflow_state(&self) -> Result<WorkflowStateBindingEnum, BindingError> {
        let core = self.use_core().await?;
        Ok(core.workflow.state().into())
    }

    #[uniffi::method]
    pub async fn submit_verification(
        &self,
        request: SubmitVerificationRequestBindingDTO,
    ) -> Result<VerificationBindingDTO, BindingError> {
        let core = self.use_core().await?;
        Ok(core
            .workflow
            .submit_verification(request.into())
            .await?
            .into())
    }

    #[uniffi::method]
    pub async fn check_verification_status(
        &self,
    ) -> Result<WorkflowStateBindingEnum, BindingError> {
        let core = self.use_core().await?;
        Ok(core.workflow.check_status().await?.into())
    }

    #[uniffi::method]
    pub async fn request_loan(
        &self,
        request: CreateLoanRequestBindingDTO,
    ) -> Result<LoanBindingDTO, BindingError> {
        let request = CreateLoanRequestDTO::try_from(request)?;
        let core = self.use_core().await?;
        Ok(core.workflow.submit_loan(request).await?.into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, From, uniffi::Enum)]
#[from(WorkflowStep)]
pub enum WorkflowStepBindingEnum {
    Verify,
    Pending,
    Apply,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum WorkflowStateBindingEnum {
    Inactive,
    Loading,
    Ready { step: WorkflowStepBindingEnum },
    Failed { reason: String },
}

impl From<WorkflowState> for WorkflowStateBindingEnum {
    fn from(value: WorkflowState) -> Self {
        match value {
            WorkflowState::Inactive => Self::Inactive,
            WorkflowState::Loading => Self::Loading,
            WorkflowState::Ready(step) => Self::Ready { step: step.into() },
            WorkflowState::Failed { reason } => Self::Failed { reason },
        }
    }
}
