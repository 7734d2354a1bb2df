use secrecy::SecretString;

use super::AuthService;
use super::dto::{LoginRequestDTO, RegisterRequestDTO};
use super::validator::{validate_login_request, validate_register_request};
use crate::model::user::{Credentials, Registration, User};
use crate::service::common_mapper::document_from_dto;
use crate::service::error::{ServiceError, ValidationError};
use crate::util::password_strength::{self, PasswordStrength};

impl AuthService {
    /// Exchanges credentials for a session and returns the logged in user.
    ///
    /// The session is only kept when the user profile could be loaded as well.
    #[tracing::instrument(level = "debug", skip_all, fields(email = %request.email), err(Debug))]
    pub async fn login(&self, request: LoginRequestDTO) -> Result<User, ServiceError> {
        validate_login_request(&request)?;

        let credentials = Credentials {
            email: request.email.trim().to_owned(),
            password: request.password,
        };
        let token = self.loan_api_client.login(&credentials).await?;
        self.session.set_token(token).await;

        match self.loan_api_client.current_user().await {
            Ok(user) => {
                tracing::info!(admin = user.is_admin(), "Logged in");
                Ok(user)
            }
            Err(error) => {
                self.session.clear().await;
                Err(error.into())
            }
        }
    }

    /// Creates an account, the user logs in separately afterwards.
    #[tracing::instrument(level = "debug", skip_all, fields(email = %request.email), err(Debug))]
    pub async fn register(&self, request: RegisterRequestDTO) -> Result<(), ServiceError> {
        validate_register_request(&request)?;

        let Some(document) = request.id_document else {
            return Err(ValidationError::MissingFields(vec!["IdDocument"]).into());
        };

        let registration = Registration {
            full_name: request.full_name.trim().to_owned(),
            email: request.email.trim().to_owned(),
            password: request.password,
            role: request.role.unwrap_or_default(),
            contact: request.contact.trim().to_owned(),
            id_document: document_from_dto(document)?,
        };

        Ok(self.loan_api_client.register(&registration).await?)
    }

    pub async fn logout(&self) {
        self.session.clear().await;
        tracing::info!("Logged out");
    }

    /// Restores a persisted session, returns whether one exists
    pub async fn restore_session(&self) -> bool {
        self.session.load().await
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Stores an externally obtained token as the current session
    pub async fn set_session_token(&self, token: SecretString) {
        self.session.set_token(token).await;
    }

    pub fn password_strength(&self, password: &str) -> PasswordStrength {
        password_strength::evaluate(password)
    }
}
