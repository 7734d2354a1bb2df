use std::sync::Arc;

use loan_core::proto::notice::{NoticeSeverity, UserNotice};
use loan_core::service::loan::dto::LoanListState;
use loan_core::service::workflow::dto::WorkflowState;
use one_dto_mapper::From;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch};
use tokio_util::sync::CancellationToken;

use super::LoanCoreBinding;
use super::loan::LoanListStateBindingDTO;
use super::workflow::WorkflowStateBindingEnum;
use crate::error::BindingError;

/// Receives state changes of both screens and transient notices
#[uniffi::export(with_foreign)]
pub trait CoreEventListener: Send + Sync {
    fn on_workflow_state(&self, state: WorkflowStateBindingEnum);
    fn on_loan_list_state(&self, state: LoanListStateBindingDTO);
    fn on_notice(&self, notice: UserNoticeBindingDTO);
}

#[uniffi::export(async_runtime = "tokio")]
impl LoanCoreBinding {
    /// Events are delivered until the returned subscription is cancelled or dropped.
    #[uniffi::method]
    pub async fn subscribe_events(
        &self,
        listener: Arc<dyn CoreEventListener>,
    ) -> Result<Arc<EventSubscriptionBinding>, BindingError> {
        let core = self.use_core().await?;

        let cancellation = CancellationToken::new();
        tokio::spawn(forward_events(
            listener,
            core.workflow.subscribe(),
            core.loan_list.subscribe(),
            core.notices.subscribe(),
            cancellation.clone(),
        ));

        Ok(Arc::new(EventSubscriptionBinding { cancellation }))
    }
}

#[derive(uniffi::Object)]
pub struct EventSubscriptionBinding {
    cancellation: CancellationToken,
}

#[uniffi::export]
impl EventSubscriptionBinding {
    #[uniffi::method]
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }
}

impl Drop for EventSubscriptionBinding {
    fn drop(&mut self) {
        self.cancellation.cancel();
    }
}

pub(crate) async fn forward_events(
    listener: Arc<dyn CoreEventListener>,
    mut workflow: watch::Receiver<WorkflowState>,
    mut loan_list: watch::Receiver<LoanListState>,
    mut notices: broadcast::Receiver<UserNotice>,
    cancellation: CancellationToken,
) {
    let state = workflow.borrow_and_update().clone();
    listener.on_workflow_state(state.into());
    let state = loan_list.borrow_and_update().clone();
    listener.on_loan_list_state(state.into());

    loop {
        tokio::select! {
            biased;
            _ = cancellation.cancelled() => break,
            changed = workflow.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = workflow.borrow_and_update().clone();
                listener.on_workflow_state(state.into());
            }
            changed = loan_list.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = loan_list.borrow_and_update().clone();
                listener.on_loan_list_state(state.into());
            }
            notice = notices.recv() => match notice {
                Ok(notice) => listener.on_notice(notice.into()),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event listener lagging, notices dropped");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }
    tracing::debug!("Event forwarding stopped");
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, From, uniffi::Enum)]
#[from(NoticeSeverity)]
pub enum NoticeSeverityBindingEnum {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum NoticeKindBindingEnum {
    NotLoggedIn,
    MissingFields { fields: Vec<String> },
    VerificationSubmitted,
    VerificationSubmissionFailed { reason: String },
    VerificationApproved,
    VerificationRejected,
    VerificationStillPending,
    StatusCheckFailed { reason: String },
    LoanSubmitted { loan_id: String },
    LoanSubmissionFailed { reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct UserNoticeBindingDTO {
    pub kind: NoticeKindBindingEnum,
    pub title: String,
    pub severity: NoticeSeverityBindingEnum,
}

impl From<UserNotice> for UserNoticeBindingDTO {
    fn from(notice: UserNotice) -> Self {
        let title = notice.title().to_owned();
        let severity = notice.severity().into();

        let kind = match notice {
            UserNotice::NotLoggedIn => NoticeKindBindingEnum::NotLoggedIn,
            UserNotice::MissingFields { fields } => NoticeKindBindingEnum::MissingFields {
                fields: fields.into_iter().map(str::to_owned).collect(),
            },
            UserNotice::VerificationSubmitted => NoticeKindBindingEnum::VerificationSubmitted,
            UserNotice::VerificationSubmissionFailed { reason } => {
                NoticeKindBindingEnum::VerificationSubmissionFailed { reason }
            }
            UserNotice::VerificationApproved => NoticeKindBindingEnum::VerificationApproved,
            UserNotice::VerificationRejected => NoticeKindBindingEnum::VerificationRejected,
            UserNotice::VerificationStillPending => NoticeKindBindingEnum::VerificationStillPending,
            UserNotice::StatusCheckFailed { reason } => {
                NoticeKindBindingEnum::StatusCheckFailed { reason }
            }
            UserNotice::LoanSubmitted { loan_id } => NoticeKindBindingEnum::LoanSubmitted {
                loan_id: loan_id.into(),
            },
            UserNotice::LoanSubmissionFailed { reason } => {
                NoticeKindBindingEnum::LoanSubmissionFailed { reason }
            }
        };

        Self {
            kind,
            title,
            severity,
        }
    }
}
