use loan_core::model::notification::Notification;
use loan_core::service::notification::dto::NotificationListDTO;
use one_dto_mapper::{From, convert_inner};

use super::LoanCoreBinding;
use crate::error::BindingError;
use crate::utils::format_timestamp_opt;

#[uniffi::export(async_runtime = "tokio")]
impl LoanCoreBinding {
    /// Newest first
    #[uniffi::method]
    pub async fn get_notifications(&self) -> Result<NotificationListBindingDTO, BindingError> {
        let core = self.use_core().await?;
        Ok(core
            .notification_service
            .get_notification_list()
            .await?
            .into())
    }
}

#[derive(Clone, Debug, From, uniffi::Record)]
#[from(Notification)]
pub struct NotificationBindingDTO {
    pub id: i64,
    pub subject: String,
    pub message: String,
    #[from(with_fn_ref = format_timestamp_opt)]
    pub created_at: Option<String>,
    pub read: bool,
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct NotificationListBindingDTO {
    pub values: Vec<NotificationBindingDTO>,
    pub unread_count: u64,
}

impl From<NotificationListDTO> for NotificationListBindingDTO {
    fn from(value: NotificationListDTO) -> Self {
        Self {
            unread_count: value.unread_count as u64,
            values: convert_inner(value.values),
        }
    }
}
