//! Loan application wizard: verify identity, wait for review, request a loan.
//!
//! The step is never persisted. Each activation derives it again from the remote
//! verification status.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use self::dto::WorkflowState;
use self::tracker::VerificationStatusTracker;
use crate::proto::notice::NoticeBus;
use crate::service::loan::view_model::LoanListViewModel;
use crate::service::verification::VerificationService;

pub mod dto;
pub mod service;
pub mod tracker;

pub struct WorkflowController {
    tracker: VerificationStatusTracker,
    verification_service: VerificationService,
    loan_list: Arc<LoanListViewModel>,
    notices: NoticeBus,
    state: watch::Sender<WorkflowState>,
    activation: Mutex<CancellationToken>,
}

impl WorkflowController {
    pub fn new(
        tracker: VerificationStatusTracker,
        verification_service: VerificationService,
        loan_list: Arc<LoanListViewModel>,
        notices: NoticeBus,
    ) -> Self {
        let activation = CancellationToken::new();
        activation.cancel();

        Self {
            tracker,
            verification_service,
            loan_list,
            notices,
            state: watch::Sender::new(WorkflowState::Inactive),
            activation: Mutex::new(activation),
        }
    }

    fn current_activation(&self) -> CancellationToken {
        self.activation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn renew_activation(&self) -> CancellationToken {
        let fresh = CancellationToken::new();
        let previous = std::mem::replace(
            &mut *self
                .activation
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
            fresh.clone(),
        );
        previous.cancel();
        fresh
    }
}
