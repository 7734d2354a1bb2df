use super::dto::WorkflowStep;
use crate::model::verification::VerificationStatus;
use crate::service::error::ServiceError;
use crate::service::verification::VerificationService;

/// Maps the remote verification status to the wizard step.
#[derive(Clone)]
pub struct VerificationStatusTracker {
    verification_service: VerificationService,
    surface_errors: bool,
}

pub fn stage_for_status(status: Option<VerificationStatus>) -> WorkflowStep {
    match status {
        Some(VerificationStatus::Approved) => WorkflowStep::Apply,
        Some(VerificationStatus::Pending) => WorkflowStep::Pending,
        Some(VerificationStatus::NotSubmitted | VerificationStatus::Rejected) | None => {
            WorkflowStep::Verify
        }
    }
}

impl VerificationStatusTracker {
    pub fn new(verification_service: VerificationService, surface_errors: bool) -> Self {
        Self {
            verification_service,
            surface_errors,
        }
    }

    pub fn surface_errors(&self) -> bool {
        self.surface_errors
    }

    /// Latest status, a failed fetch reads as "no status" unless errors are surfaced
    pub async fn fetch_status(&self) -> Result<Option<VerificationStatus>, ServiceError> {
        match self.verification_service.get_verification_status().await {
            Ok(status) => Ok(status),
            Err(error) if self.surface_errors => Err(error),
            Err(error) => {
                tracing::warn!(%error, "Verification status unavailable, treated as not submitted");
                Ok(None)
            }
        }
    }

    pub async fn current_stage(&self) -> Result<WorkflowStep, ServiceError> {
        self.fetch_status().await.map(stage_for_status)
    }
}
