use loan_core::model::user::UserRole;
use loan_core::service::auth::dto::{LoginRequestDTO, RegisterRequestDTO};
use loan_core::service::common_dto::DocumentDTO;
use loan_core::util::password_strength::{PasswordRequirements, PasswordStrength};
use one_dto_mapper::{From, Into};
use secrecy::SecretString;

use super::LoanCoreBinding;
use super::user::UserBindingDTO;
use crate::error::BindingError;

#[uniffi::export(async_runtime = "tokio")]
impl LoanCoreBinding {
    #[uniffi::method]
    pub async fn login(
        &self,
        request: LoginRequestBindingDTO,
    ) -> Result<UserBindingDTO, BindingError> {
        let core = self.use_core().await?;
        Ok(core.login(request.into()).await?.into())
    }

    #[uniffi::method]
    pub async fn register(&self, request: RegisterRequestBindingDTO) -> Result<(), BindingError> {
        let core = self.use_core().await?;
        Ok(core.auth_service.register(request.into()).await?)
    }

    #[uniffi::method]
    pub async fn logout(&self) -> Result<(), BindingError> {
        let core = self.use_core().await?;
        core.logout().await;
        Ok(())
    }

    /// Loads a persisted session, returns whether the user is logged in afterwards.
    #[uniffi::method]
    pub async fn restore_session(&self) -> Result<bool, BindingError> {
        let core = self.use_core().await?;
        Ok(core.auth_service.restore_session().await)
    }

    #[uniffi::method]
    pub async fn is_logged_in(&self) -> Result<bool, BindingError> {
        let core = self.use_core().await?;
        Ok(core.auth_service.is_logged_in())
    }

    #[uniffi::method]
    pub async fn check_password_strength(
        &self,
        password: String,
    ) -> Result<PasswordStrengthBindingDTO, BindingError> {
        let core = self.use_core().await?;
        Ok(core.auth_service.password_strength(&password).into())
    }
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct LoginRequestBindingDTO {
    pub email: String,
    pub password: String,
}

impl From<LoginRequestBindingDTO> for LoginRequestDTO {
    fn from(value: LoginRequestBindingDTO) -> Self {
        Self {
            email: value.email,
            password: SecretString::from(value.password),
        }
    }
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct RegisterRequestBindingDTO {
    pub full_name: String,
    pub email: String,
    pub password: String,
    /// `User` or `Admin`, defaults to `User`
    pub role: Option<String>,
    pub contact: String,
    pub id_document: Option<DocumentBindingDTO>,
}

impl From<RegisterRequestBindingDTO> for RegisterRequestDTO {
    fn from(value: RegisterRequestBindingDTO) -> Self {
        Self {
            full_name: value.full_name,
            email: value.email,
            password: SecretString::from(value.password),
            role: value
                .role
                .filter(|role| !role.trim().is_empty())
                .map(|role| role.trim().parse().unwrap_or(UserRole::Other(role))),
            contact: value.contact,
            id_document: value.id_document.map(Into::into),
        }
    }
}

#[derive(Clone, Debug, Into, uniffi::Record)]
#[into(DocumentDTO)]
pub struct DocumentBindingDTO {
    pub content: Vec<u8>,
    /// e.g. `image/jpeg` or `application/pdf`
    pub media_type: String,
    pub file_name: String,
}

#[derive(Clone, Debug, From, uniffi::Record)]
#[from(PasswordRequirements)]
pub struct PasswordRequirementsBindingDTO {
    pub length: bool,
    pub has_upper_case: bool,
    pub has_lower_case: bool,
    pub has_number: bool,
    pub has_special_char: bool,
    pub has_unique_chars: bool,
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct PasswordStrengthBindingDTO {
    pub score: u8,
    pub label: String,
    /// Between 0 and 1
    pub progress: f32,
    pub is_valid: bool,
    pub requirements: PasswordRequirementsBindingDTO,
}

impl From<PasswordStrength> for PasswordStrengthBindingDTO {
    fn from(value: PasswordStrength) -> Self {
        Self {
            score: value.score,
            label: value.label().to_owned(),
            progress: value.progress(),
            is_valid: value.is_valid(),
            requirements: value.requirements.into(),
        }
    }
}
