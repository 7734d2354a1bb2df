//! Loan list screen state and the loan request submission.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::LoanService;
use super::dto::{CreateLoanRequestDTO, LoanListState};
use crate::model::loan::Loan;
use crate::proto::notice::{NoticeBus, UserNotice};
use crate::service::common_mapper::failure_notice;
use crate::service::error::ServiceError;

/// Holds the loan list of the logged in user for as long as the screen lives.
///
/// Every fetch takes a ticket and only the most recently issued one may update the
/// state, so a slow response can never overwrite a newer one. Results resolving after
/// [`LoanListViewModel::deactivate`] are dropped.
///
/// A successful submission marks the list stale, so the next activation fetches again
/// even when the submission happened while the screen was inactive.
pub struct LoanListViewModel {
    loan_service: LoanService,
    notices: NoticeBus,
    state: watch::Sender<LoanListState>,
    latest_ticket: AtomicU64,
    activation: Mutex<CancellationToken>,
}

impl LoanListViewModel {
    pub fn new(loan_service: LoanService, notices: NoticeBus) -> Self {
        let activation = CancellationToken::new();
        activation.cancel();

        Self {
            loan_service,
            notices,
            state: watch::Sender::new(LoanListState::default()),
            latest_ticket: AtomicU64::new(0),
            activation: Mutex::new(activation),
        }
    }

    pub fn state(&self) -> LoanListState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoanListState> {
        self.state.subscribe()
    }

    /// Fetches the list unless it was already loaded
    pub async fn activate(&self) -> LoanListState {
        let fresh = CancellationToken::new();
        let previous = std::mem::replace(&mut *self.lock_activation(), fresh);
        previous.cancel();

        if self.state.borrow().loaded {
            return self.state();
        }
        self.refresh().await
    }

    pub fn deactivate(&self) {
        self.lock_activation().cancel();
        self.state.send_if_modified(|state| {
            let was_loading = state.loading;
            state.loading = false;
            was_loading
        });
    }

    /// Forgets the loans of the previous user and drops any fetch in flight
    pub fn reset(&self) {
        self.lock_activation().cancel();
        self.latest_ticket.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(LoanListState::default());
        tracing::debug!("Loan list reset");
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn refresh(&self) -> LoanListState {
        let token = self.current_activation();
        if token.is_cancelled() {
            tracing::debug!("Loan list inactive, refresh skipped");
            return self.state();
        }

        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| state.loading = true);

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!(ticket, "Loan list deactivated, fetch result dropped");
                return self.state();
            }
            result = self.loan_service.get_loan_list() => result,
        };

        if ticket != self.latest_ticket.load(Ordering::SeqCst) {
            tracing::debug!(ticket, "Newer loan list fetch issued, result dropped");
            return self.state();
        }

        self.state.send_modify(|state| {
            state.loading = false;
            match result {
                Ok(loans) => {
                    state.loans = loans;
                    state.error = None;
                    state.loaded = true;
                }
                Err(error) => {
                    state.error = Some(error.reason());
                }
            }
        });

        self.state()
    }

    /// Submits a loan request, sent exactly once.
    ///
    /// On success the list is refreshed right away when active and on the next
    /// activation otherwise. On failure it stays as it was.
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn submit(&self, request: CreateLoanRequestDTO) -> Result<Loan, ServiceError> {
        match self.loan_service.create_loan(request).await {
            Ok(loan) => {
                self.notices.publish(UserNotice::LoanSubmitted {
                    loan_id: loan.id.to_owned(),
                });
                self.mark_stale();
                self.refresh().await;
                Ok(loan)
            }
            Err(error) => {
                self.notices.publish(failure_notice(&error, |reason| {
                    UserNotice::LoanSubmissionFailed { reason }
                }));
                Err(error)
            }
        }
    }

    fn mark_stale(&self) {
        self.latest_ticket.fetch_add(1, Ordering::SeqCst);
        self.state.send_modify(|state| state.loaded = false);
    }

    fn current_activation(&self) -> CancellationToken {
        self.lock_activation().clone()
    }

    fn lock_activation(&self) -> std::sync::MutexGuard<'_, CancellationToken> {
        self.activation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
