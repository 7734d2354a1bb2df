use loan_core::model::user::User;

use super::LoanCoreBinding;
use crate::error::BindingError;

#[uniffi::export(async_runtime = "tokio")]
impl LoanCoreBinding {
    #[uniffi::method]
    pub async fn get_current_user(&self) -> Result<UserBindingDTO, BindingError> {
        let core = self.use_core().await?;
        Ok(core.user_service.get_current_user().await?.into())
    }

    /// Candidate guarantors for a loan request
    #[uniffi::method]
    pub async fn get_users(&self) -> Result<Vec<UserBindingDTO>, BindingError> {
        let core = self.use_core().await?;
        Ok(core
            .user_service
            .get_user_list()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct UserBindingDTO {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub contact: Option<String>,
    pub role: String,
    pub is_admin: bool,
}

impl From<User> for UserBindingDTO {
    fn from(value: User) -> Self {
        Self {
            is_admin: value.is_admin(),
            id: value.id.into(),
            full_name: value.full_name,
            email: value.email,
            contact: value.contact,
            role: value.role.to_string(),
        }
    }
}
