use super::UserService;
use crate::model::user::User;
use crate::service::error::ServiceError;

impl UserService {
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn get_current_user(&self) -> Result<User, ServiceError> {
        Ok(self
            .retry
            .run("current_user", || self.loan_api_client.current_user())
            .await?)
    }

    /// Candidates for the guarantor picker
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn get_user_list(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self
            .retry
            .run("list_users", || self.loan_api_client.list_users())
            .await?)
    }
}
