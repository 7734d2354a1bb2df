//! User facing notices (toasts) raised by services, rendered by the UI layer.

use shared_types::LoanId;
use tokio::sync::broadcast;

const NOTICE_CAPACITY: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeSeverity {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UserNotice {
    NotLoggedIn,
    MissingFields { fields: Vec<&'static str> },
    VerificationSubmitted,
    VerificationSubmissionFailed { reason: String },
    VerificationApproved,
    VerificationRejected,
    VerificationStillPending,
    StatusCheckFailed { reason: String },
    LoanSubmitted { loan_id: LoanId },
    LoanSubmissionFailed { reason: String },
}

impl UserNotice {
    pub fn severity(&self) -> NoticeSeverity {
        match self {
            UserNotice::VerificationSubmitted
            | UserNotice::VerificationApproved
            | UserNotice::LoanSubmitted { .. } => NoticeSeverity::Success,
            UserNotice::VerificationStillPending => NoticeSeverity::Info,
            UserNotice::NotLoggedIn
            | UserNotice::MissingFields { .. }
            | UserNotice::VerificationSubmissionFailed { .. }
            | UserNotice::VerificationRejected
            | UserNotice::StatusCheckFailed { .. }
            | UserNotice::LoanSubmissionFailed { .. } => NoticeSeverity::Error,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            UserNotice::NotLoggedIn => "You must be logged in",
            UserNotice::MissingFields { .. } => "Please fill all required fields",
            UserNotice::VerificationSubmitted => "Verification submitted",
            UserNotice::VerificationSubmissionFailed { .. } => "Failed to submit verification",
            UserNotice::VerificationApproved => "Verification approved!",
            UserNotice::VerificationRejected => "Verification rejected. Please resubmit.",
            UserNotice::VerificationStillPending => "Still pending review.",
            UserNotice::StatusCheckFailed { .. } => "Failed to check verification status",
            UserNotice::LoanSubmitted { .. } => "Loan request submitted!",
            UserNotice::LoanSubmissionFailed { .. } => "Failed to request loan",
        }
    }
}

#[derive(Clone)]
pub struct NoticeBus {
    sender: broadcast::Sender<UserNotice>,
}

impl Default for NoticeBus {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(NOTICE_CAPACITY);
        Self { sender }
    }

    pub fn publish(&self, notice: UserNotice) {
        tracing::debug!(?notice, "User notice");
        if self.sender.send(notice).is_err() {
            tracing::trace!("No notice subscribers");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UserNotice> {
        self.sender.subscribe()
    }
}
