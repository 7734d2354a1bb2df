use super::NotificationService;
use super::dto::NotificationListDTO;
use crate::service::error::ServiceError;

impl NotificationService {
    /// Newest first when the server provides creation dates
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn get_notification_list(&self) -> Result<NotificationListDTO, ServiceError> {
        let mut notifications = self
            .retry
            .run("fetch_notifications", || {
                self.loan_api_client.fetch_notifications()
            })
            .await?;

        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications.into())
    }
}
