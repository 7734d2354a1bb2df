use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::WorkflowController;
use super::dto::{WorkflowState, WorkflowStep};
use crate::model::loan::Loan;
use crate::model::verification::{Verification, VerificationStatus};
use crate::proto::notice::UserNotice;
use crate::service::common_mapper::failure_notice;
use crate::service::error::{BusinessLogicError, ServiceError};
use crate::service::loan::dto::CreateLoanRequestDTO;
use crate::service::verification::dto::SubmitVerificationRequestDTO;

impl WorkflowController {
    pub fn state(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    /// Derives the initial step from the remote status.
    ///
    /// A previous activation still in flight is abandoned.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn activate(&self) -> WorkflowState {
        let token = self.renew_activation();
        self.state.send_replace(WorkflowState::Loading);

        let stage = tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!("Workflow deactivated during initial status fetch");
                return self.state();
            }
            stage = self.tracker.current_stage() => stage,
        };

        let next = match stage {
            Ok(step) => WorkflowState::Ready(step),
            Err(error) => WorkflowState::Failed {
                reason: error.reason(),
            },
        };
        tracing::debug!(?next, "Workflow activated");
        self.state.send_replace(next.to_owned());
        next
    }

    pub fn deactivate(&self) {
        self.current_activation().cancel();
        self.state.send_replace(WorkflowState::Inactive);
    }

    /// Submits the identity verification. Verify moves to Pending once the server accepted it.
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    pub async fn submit_verification(
        &self,
        request: SubmitVerificationRequestDTO,
    ) -> Result<Verification, ServiceError> {
        let token = self.require_step(WorkflowStep::Verify)?;

        let verification = match self.verification_service.submit_verification(request).await {
            Ok(verification) => verification,
            Err(error) => {
                self.notices.publish(failure_notice(&error, |reason| {
                    UserNotice::VerificationSubmissionFailed { reason }
                }));
                return Err(error);
            }
        };

        self.notices.publish(UserNotice::VerificationSubmitted);
        self.transition(&token, WorkflowStep::Verify, WorkflowStep::Pending);
        Ok(verification)
    }

    /// Manual re-check while the verification is under review
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn check_status(&self) -> Result<WorkflowState, ServiceError> {
        let token = self.require_step(WorkflowStep::Pending)?;

        let status = tokio::select! {
            biased;
            _ = token.cancelled() => return Ok(self.state()),
            status = self.tracker.fetch_status() => status,
        };

        let status = match status {
            Ok(status) => status,
            Err(error) => {
                self.notices.publish(UserNotice::StatusCheckFailed {
                    reason: error.reason(),
                });
                return Err(error);
            }
        };

        let (next, notice) = match status {
            Some(VerificationStatus::Approved) => {
                (Some(WorkflowStep::Apply), UserNotice::VerificationApproved)
            }
            Some(VerificationStatus::Rejected) => {
                (Some(WorkflowStep::Verify), UserNotice::VerificationRejected)
            }
            Some(VerificationStatus::Pending | VerificationStatus::NotSubmitted) | None => {
                (None, UserNotice::VerificationStillPending)
            }
        };

        if let Some(next) = next {
            self.transition(&token, WorkflowStep::Pending, next);
        }
        self.notices.publish(notice);

        Ok(self.state())
    }

    /// Loan request of the final step, the step itself does not change
    pub async fn submit_loan(&self, request: CreateLoanRequestDTO) -> Result<Loan, ServiceError> {
        self.require_step(WorkflowStep::Apply)?;
        self.loan_list.submit(request).await
    }

    fn require_step(&self, expected: WorkflowStep) -> Result<CancellationToken, ServiceError> {
        let token = self.current_activation();
        match &*self.state.borrow() {
            WorkflowState::Inactive => Err(BusinessLogicError::WorkflowInactive.into()),
            WorkflowState::Ready(step) if *step == expected => Ok(token),
            _ => Err(BusinessLogicError::InvalidWorkflowStep { expected }.into()),
        }
    }

    /// Applies `from -> to` unless the activation ended or the step changed meanwhile
    fn transition(&self, token: &CancellationToken, from: WorkflowStep, to: WorkflowStep) {
        if token.is_cancelled() {
            tracing::debug!(%from, %to, "Workflow deactivated, transition dropped");
            return;
        }

        let applied = self.state.send_if_modified(|state| {
            if *state == WorkflowState::Ready(from) {
                *state = WorkflowState::Ready(to);
                true
            } else {
                false
            }
        });

        if applied {
            tracing::debug!(%from, %to, "Workflow step changed");
        }
    }
}
