use std::str::FromStr;
use std::sync::Arc;

use mime::Mime;
use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use shared_types::{LoanProductId, UserId, VerificationId};
use wiremock::matchers::{
    body_json, body_string_contains, header, header_exists, method, path,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::HTTPLoanApiClient;
use crate::config::core_config::CoreConfig;
use crate::model::loan::{LoanDraft, LoanStatus};
use crate::model::user::{Credentials, Registration, UserRole};
use crate::model::verification::{IdDocument, VerificationDraft, VerificationStatus};
use crate::proto::session_store::SessionStore;
use crate::provider::http_client::reqwest_client::ReqwestClient;
use crate::provider::loan_api_client::LoanApiClient;
use crate::provider::loan_api_client::error::LoanApiClientError;
use crate::provider::session_storage::memory::InMemorySessionStorage;

struct TestContext {
    server: MockServer,
    session: Arc<SessionStore>,
    client: HTTPLoanApiClient,
}

async fn setup(token: Option<&str>, extra_config: &str) -> TestContext {
    let server = MockServer::start().await;
    let config = CoreConfig::from_yaml([
        format!("api:\n    baseUrl: '{}'\n", server.uri()),
        extra_config.to_owned(),
    ])
    .unwrap();

    let session = Arc::new(SessionStore::new(
        Arc::new(InMemorySessionStorage::default()),
        "token",
    ));
    if let Some(token) = token {
        session.set_token(SecretString::from(token)).await;
    }

    let client = HTTPLoanApiClient::new(
        Arc::new(ReqwestClient::default()),
        session.clone(),
        &config,
    );

    TestContext {
        server,
        session,
        client,
    }
}

fn document() -> IdDocument {
    IdDocument {
        content: b"%PDF-1.4 passport".to_vec(),
        media_type: Mime::from_str("application/pdf").unwrap(),
        file_name: "passport.pdf".to_owned(),
    }
}

#[tokio::test]
async fn test_submit_loan_sends_body_and_maps_response() {
    let context = setup(Some("abc123"), "").await;
    Mock::given(method("POST"))
        .and(path("/api/Loans/borrow"))
        .and(header("Authorization", "Bearer abc123"))
        .and(body_json(json!({
            "loanProductId": "p1",
            "amount": 5000.0,
            "guarantorUserIds": ["u2"],
            "status": "Pending"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "L1",
            "amount": 5000,
            "loanProductId": "p1",
            "guarantorUserIds": ["u2"],
            "status": "Pending",
            "totalRepayable": 5600,
            "interestRate": 12,
            "dueDate": "2025-01-01"
        })))
        .expect(1)
        .mount(&context.server)
        .await;

    let loan = context
        .client
        .submit_loan(&LoanDraft {
            loan_product_id: LoanProductId::from("p1"),
            amount: Decimal::from(5000),
            guarantor_user_ids: vec![UserId::from("u2")],
        })
        .await
        .unwrap();

    assert_eq!(loan.id.as_str(), "L1");
    assert_eq!(loan.status, LoanStatus::Pending);
    assert_eq!(loan.total_repayable, Some(Decimal::from(5600)));
    assert_eq!(loan.interest_rate, Some(Decimal::from(12)));
    assert_eq!(loan.due_date.unwrap().date().to_string(), "2025-01-01");
    assert_eq!(loan.guarantor_user_ids, vec![UserId::from("u2")]);
}

#[tokio::test]
async fn test_submit_loan_idempotency_key_when_enabled() {
    let context = setup(Some("abc123"), "submission:\n    idempotencyKeys: true\n").await;
    Mock::given(method("POST"))
        .and(path("/api/Loans/borrow"))
        .and(header_exists("Idempotency-Key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 7, "status": "Pending"})),
        )
        .expect(1)
        .mount(&context.server)
        .await;

    let loan = context
        .client
        .submit_loan(&LoanDraft {
            loan_product_id: LoanProductId::from("p1"),
            amount: Decimal::new(12550, 2),
            guarantor_user_ids: vec![],
        })
        .await
        .unwrap();

    assert_eq!(loan.id.as_str(), "7");
}

#[tokio::test]
async fn test_authenticated_call_without_session_sends_nothing() {
    let context = setup(None, "").await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&context.server)
        .await;

    let result = context.client.fetch_loans().await;
    assert!(matches!(result, Err(LoanApiClientError::Unauthorized)));

    let result = context.client.fetch_verification_status().await;
    assert!(matches!(result, Err(LoanApiClientError::Unauthorized)));
}

#[tokio::test]
async fn test_logout_then_fetch_is_unauthorized() {
    let context = setup(Some("abc123"), "").await;
    Mock::given(method("GET"))
        .and(path("/api/Loans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&context.server)
        .await;

    assert!(context.client.fetch_loans().await.unwrap().is_empty());

    context.session.clear().await;
    let result = context.client.fetch_loans().await;
    assert!(matches!(result, Err(LoanApiClientError::Unauthorized)));
}

#[tokio::test]
async fn test_fetch_loans_accepts_wrapped_list() {
    let context = setup(Some("abc123"), "").await;
    Mock::given(method("GET"))
        .and(path("/api/Loans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "L1", "status": "Approved", "amount": 100},
                {"id": "L2", "status": "Disbursed"}
            ]
        })))
        .mount(&context.server)
        .await;

    let loans = context.client.fetch_loans().await.unwrap();
    assert_eq!(loans.len(), 2);
    assert_eq!(loans[0].status, LoanStatus::Approved);
    assert_eq!(loans[1].status, LoanStatus::Unknown);
    assert_eq!(loans[1].amount, None);
}

#[tokio::test]
async fn test_submit_verification_uses_exact_field_names() {
    let context = setup(Some("abc123"), "").await;
    Mock::given(method("POST"))
        .and(path("/api/Verification/upload-id"))
        .and(header("Authorization", "Bearer abc123"))
        .and(body_string_contains("name=\"FirstName\""))
        .and(body_string_contains("name=\"LastName\""))
        .and(body_string_contains("name=\"DateOfBirth\""))
        .and(body_string_contains("name=\"IdNumber\""))
        .and(body_string_contains(
            "name=\"IdDocument\"; filename=\"passport.pdf\"",
        ))
        .and(body_string_contains("%PDF-1.4 passport"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "dateOfBirth": "1815-12-10",
            "idNumber": "X1",
            "status": "Pending"
        })))
        .expect(1)
        .mount(&context.server)
        .await;

    let verification = context
        .client
        .submit_verification(&VerificationDraft {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            date_of_birth: "1815-12-10".to_owned(),
            id_number: "X1".to_owned(),
            document: document(),
        })
        .await
        .unwrap();

    assert_eq!(verification.id.as_str(), "42");
    assert_eq!(verification.status, VerificationStatus::Pending);
}

#[tokio::test]
async fn test_fetch_verification_status() {
    let context = setup(Some("abc123"), "").await;
    Mock::given(method("GET"))
        .and(path("/api/Verification/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Approved"})))
        .up_to_n_times(1)
        .mount(&context.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/Verification/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Escalated"})))
        .mount(&context.server)
        .await;

    assert_eq!(
        context.client.fetch_verification_status().await.unwrap(),
        Some(VerificationStatus::Approved)
    );
    assert_eq!(context.client.fetch_verification_status().await.unwrap(), None);
}

#[tokio::test]
async fn test_review_verification_paths() {
    let context = setup(Some("admin-token"), "").await;
    Mock::given(method("PUT"))
        .and(path("/api/Verification/5/verify"))
        .and(header("Authorization", "Bearer admin-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 5, "status": "Approved"})),
        )
        .expect(1)
        .mount(&context.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/Verification/6/reject"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 6, "status": "Rejected"})),
        )
        .expect(1)
        .mount(&context.server)
        .await;

    let approved = context
        .client
        .approve_verification(&VerificationId::from("5"))
        .await
        .unwrap();
    assert_eq!(approved.status, VerificationStatus::Approved);

    let rejected = context
        .client
        .reject_verification(&VerificationId::from("6"))
        .await
        .unwrap();
    assert_eq!(rejected.status, VerificationStatus::Rejected);
}

#[tokio::test]
async fn test_login_returns_token_without_storing_it() {
    let context = setup(None, "").await;
    Mock::given(method("POST"))
        .and(path("/api/Auth/login"))
        .and(body_json(json!({"email": "ada@example.com", "password": "S3cret!pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123"})))
        .expect(1)
        .mount(&context.server)
        .await;

    let token = context
        .client
        .login(&Credentials {
            email: "ada@example.com".to_owned(),
            password: SecretString::from("S3cret!pw"),
        })
        .await
        .unwrap();

    assert_eq!(token.expose_secret(), "abc123");
    assert!(!context.session.is_authenticated());
}

#[tokio::test]
async fn test_login_without_token_in_response_fails() {
    let context = setup(None, "").await;
    Mock::given(method("POST"))
        .and(path("/api/Auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&context.server)
        .await;

    let result = context
        .client
        .login(&Credentials {
            email: "ada@example.com".to_owned(),
            password: SecretString::from("pw"),
        })
        .await;
    assert!(matches!(result, Err(LoanApiClientError::ValidationFailed(_))));
}

#[tokio::test]
async fn test_register_uses_exact_field_names() {
    let context = setup(None, "").await;
    Mock::given(method("POST"))
        .and(path("/api/Auth/register"))
        .and(body_string_contains("name=\"fullName\""))
        .and(body_string_contains("name=\"email\""))
        .and(body_string_contains("name=\"password\""))
        .and(body_string_contains("name=\"role\"\r\n\r\nUser"))
        .and(body_string_contains("name=\"contact\""))
        .and(body_string_contains("name=\"IdDocument\""))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&context.server)
        .await;

    context
        .client
        .register(&Registration {
            full_name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            password: SecretString::from("S3cret!pw"),
            role: UserRole::User,
            contact: "+41000000".to_owned(),
            id_document: document(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_error_mapping() {
    let context = setup(Some("abc123"), "").await;
    Mock::given(method("GET"))
        .and(path("/api/Loans"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&context.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/Users/me"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&context.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/Verification/all"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&context.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/Loans/borrow"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "title": "One or more validation errors occurred.",
            "errors": {"Amount": ["Amount exceeds product maximum"]}
        })))
        .mount(&context.server)
        .await;

    assert!(matches!(
        context.client.fetch_loans().await,
        Err(LoanApiClientError::Unauthorized)
    ));
    assert!(matches!(
        context.client.current_user().await,
        Err(LoanApiClientError::NotFound)
    ));
    assert!(matches!(
        context.client.fetch_verifications().await,
        Err(LoanApiClientError::ServerError { status: 502 })
    ));

    let result = context
        .client
        .submit_loan(&LoanDraft {
            loan_product_id: LoanProductId::from("p1"),
            amount: Decimal::from(1_000_000),
            guarantor_user_ids: vec![],
        })
        .await;
    assert!(matches!(
        result,
        Err(LoanApiClientError::ValidationFailed(message))
            if message == "Amount exceeds product maximum"
    ));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = CoreConfig::from_yaml(["api:\n    baseUrl: 'http://127.0.0.1:1'\n"]).unwrap();
    let session = Arc::new(SessionStore::new(
        Arc::new(InMemorySessionStorage::default()),
        "token",
    ));
    session.set_token(SecretString::from("abc123")).await;
    let client = HTTPLoanApiClient::new(Arc::new(ReqwestClient::default()), session, &config);

    let result = client.fetch_loans().await;
    assert!(matches!(result, Err(LoanApiClientError::NetworkError(_))));
}

#[tokio::test]
async fn test_notifications_and_products_are_public() {
    let context = setup(None, "").await;
    Mock::given(method("GET"))
        .and(path("/api/notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "subject": "Welcome", "message": "Hi", "createdAt": "2024-05-01T10:00:00Z", "read": false},
            {"id": 2, "subject": "Loan", "message": "Approved", "read": true}
        ])))
        .expect(1)
        .mount(&context.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/LoanProduct/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "p1", "name": "Starter", "interestRate": 12.5, "maxAmount": 10000}
        ])))
        .expect(1)
        .mount(&context.server)
        .await;

    let notifications = context.client.fetch_notifications().await.unwrap();
    assert_eq!(notifications.len(), 2);
    assert!(notifications[0].created_at.is_some());
    assert!(notifications[1].read);

    let products = context.client.list_loan_products().await.unwrap();
    assert_eq!(products[0].name, "Starter");
    assert_eq!(products[0].interest_rate, Some(Decimal::new(125, 1)));
}

#[tokio::test]
async fn test_current_user_role() {
    let context = setup(Some("abc123"), "").await;
    Mock::given(method("GET"))
        .and(path("/api/Users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "fullName": "Grace Hopper", "email": "grace@example.com", "role": "Admin"
        })))
        .mount(&context.server)
        .await;

    let user = context.client.current_user().await.unwrap();
    assert!(user.is_admin());
    assert_eq!(user.id.as_str(), "3");
}
