use std::sync::Arc;

use shared_types::UserId;

use super::UserService;
use crate::model::user::{User, UserRole};
use crate::proto::retry::RetryPolicy;
use crate::provider::loan_api_client::MockLoanApiClient;
use crate::provider::loan_api_client::error::LoanApiClientError;
use crate::service::error::ServiceError;

fn setup(loan_api_client: MockLoanApiClient, retries: u32) -> UserService {
    UserService::new(
        Arc::new(loan_api_client),
        RetryPolicy {
            retries,
            delay: Default::default(),
        },
    )
}

fn dummy_user(id: &str) -> User {
    User {
        id: UserId::from(id),
        full_name: format!("User {id}"),
        email: format!("{id}@example.com"),
        contact: None,
        role: UserRole::User,
    }
}

#[tokio::test]
async fn test_get_user_list_retries_transient_failures() {
    let mut loan_api_client = MockLoanApiClient::new();
    let mut seq = mockall::Sequence::new();
    loan_api_client
        .expect_list_users()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Err(LoanApiClientError::NetworkError("timeout".to_owned())));
    loan_api_client
        .expect_list_users()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(vec![dummy_user("u1"), dummy_user("u2")]));

    let users = setup(loan_api_client, 2).get_user_list().await.unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn test_get_current_user_unauthorized_is_not_retried() {
    let mut loan_api_client = MockLoanApiClient::new();
    loan_api_client
        .expect_current_user()
        .times(1)
        .returning(|| Err(LoanApiClientError::Unauthorized));

    let result = setup(loan_api_client, 2).get_current_user().await;
    assert!(matches!(
        result,
        Err(ServiceError::LoanApi(LoanApiClientError::Unauthorized))
    ));
}
