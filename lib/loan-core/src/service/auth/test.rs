use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use shared_types::UserId;

use super::AuthService;
use super::dto::{LoginRequestDTO, RegisterRequestDTO};
use crate::model::user::{User, UserRole};
use crate::proto::session_store::SessionStore;
use crate::provider::loan_api_client::MockLoanApiClient;
use crate::provider::loan_api_client::error::LoanApiClientError;
use crate::provider::session_storage::SessionStorage;
use crate::provider::session_storage::memory::InMemorySessionStorage;
use crate::service::common_dto::DocumentDTO;
use crate::service::error::{ServiceError, ValidationError};

struct TestContext {
    service: AuthService,
    session: Arc<SessionStore>,
    storage: Arc<InMemorySessionStorage>,
}

fn setup(loan_api_client: MockLoanApiClient) -> TestContext {
    let storage = Arc::new(InMemorySessionStorage::default());
    let session = Arc::new(SessionStore::new(storage.clone(), "token"));
    TestContext {
        service: AuthService::new(Arc::new(loan_api_client), session.clone()),
        session,
        storage,
    }
}

fn dummy_user(role: UserRole) -> User {
    User {
        id: UserId::from("u1"),
        full_name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        contact: None,
        role,
    }
}

fn login_request(email: &str, password: &str) -> LoginRequestDTO {
    LoginRequestDTO {
        email: email.to_owned(),
        password: SecretString::from(password),
    }
}

fn register_request(password: &str, document: Option<DocumentDTO>) -> RegisterRequestDTO {
    RegisterRequestDTO {
        full_name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: SecretString::from(password),
        role: None,
        contact: "+41000000".to_owned(),
        id_document: document,
    }
}

fn document() -> DocumentDTO {
    DocumentDTO {
        content: vec![0xff, 0xd8, 0xff],
        media_type: "image/jpeg".to_owned(),
        file_name: "id.jpg".to_owned(),
    }
}

#[tokio::test]
async fn test_login_stores_token_and_returns_user() {
    let mut loan_api_client = MockLoanApiClient::new();
    loan_api_client
        .expect_login()
        .withf(|credentials| {
            credentials.email == "ada@example.com"
                && credentials.password.expose_secret() == "S3cret!pw"
        })
        .times(1)
        .returning(|_| Ok(SecretString::from("abc123")));
    loan_api_client
        .expect_current_user()
        .times(1)
        .returning(|| Ok(dummy_user(UserRole::Admin)));

    let context = setup(loan_api_client);
    let user = context
        .service
        .login(login_request(" ada@example.com ", "S3cret!pw"))
        .await
        .unwrap();

    assert!(user.is_admin());
    assert!(context.service.is_logged_in());
    assert_eq!(
        context.storage.get("token").await.unwrap().as_deref(),
        Some("abc123")
    );
}

#[tokio::test]
async fn test_login_missing_fields_sends_nothing() {
    let context = setup(MockLoanApiClient::new());

    let result = context.service.login(login_request("", " ")).await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::MissingFields(fields)))
            if fields == vec!["email", "password"]
    ));
    assert!(!context.service.is_logged_in());
}

#[tokio::test]
async fn test_login_rejected_credentials() {
    let mut loan_api_client = MockLoanApiClient::new();
    loan_api_client
        .expect_login()
        .returning(|_| Err(LoanApiClientError::Unauthorized));

    let context = setup(loan_api_client);
    let result = context
        .service
        .login(login_request("ada@example.com", "wrong"))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::LoanApi(LoanApiClientError::Unauthorized))
    ));
    assert!(!context.service.is_logged_in());
}

#[tokio::test]
async fn test_login_profile_failure_drops_session() {
    let mut loan_api_client = MockLoanApiClient::new();
    loan_api_client
        .expect_login()
        .returning(|_| Ok(SecretString::from("abc123")));
    loan_api_client
        .expect_current_user()
        .returning(|| Err(LoanApiClientError::ServerError { status: 500 }));

    let context = setup(loan_api_client);
    let result = context
        .service
        .login(login_request("ada@example.com", "S3cret!pw"))
        .await;

    assert!(result.is_err());
    assert!(!context.service.is_logged_in());
    assert_eq!(context.storage.get("token").await.unwrap(), None);
}

#[tokio::test]
async fn test_logout_clears_memory_and_storage() {
    let context = setup(MockLoanApiClient::new());
    context
        .service
        .set_session_token(SecretString::from("abc123"))
        .await;
    assert!(context.service.is_logged_in());

    context.service.logout().await;

    assert!(!context.service.is_logged_in());
    assert!(context.session.token().is_none());
    assert_eq!(context.storage.get("token").await.unwrap(), None);
}

#[tokio::test]
async fn test_restore_session() {
    let context = setup(MockLoanApiClient::new());
    context.storage.set("token", "persisted").await.unwrap();

    assert!(context.service.restore_session().await);
    assert!(context.service.is_logged_in());
}

#[tokio::test]
async fn test_register_defaults_role_to_user() {
    let mut loan_api_client = MockLoanApiClient::new();
    loan_api_client
        .expect_register()
        .withf(|registration| {
            registration.role == UserRole::User
                && registration.id_document.file_name == "id.jpg"
                && registration.id_document.media_type == mime::IMAGE_JPEG
        })
        .times(1)
        .returning(|_| Ok(()));

    let context = setup(loan_api_client);
    context
        .service
        .register(register_request("S3cret!pw", Some(document())))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_requires_document() {
    let context = setup(MockLoanApiClient::new());

    let result = context
        .service
        .register(register_request("S3cret!pw", None))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::MissingFields(fields)))
            if fields == vec!["IdDocument"]
    ));
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    let context = setup(MockLoanApiClient::new());

    let result = context
        .service
        .register(register_request("password", Some(document())))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::WeakPassword))
    ));
}

#[test]
fn test_password_strength() {
    let context = setup(MockLoanApiClient::new());

    let strength = context.service.password_strength("S3cret!pw");
    assert!(strength.is_valid());
    assert_eq!(strength.label(), "Excellent");
}
