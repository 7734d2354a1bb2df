use std::sync::Arc;

use mockall::predicate::eq;
use rstest::rstest;
use shared_types::VerificationId;

use super::VerificationService;
use super::dto::{ReviewDecision, SubmitVerificationRequestDTO};
use crate::model::verification::{Verification, VerificationStatus};
use crate::proto::retry::RetryPolicy;
use crate::provider::loan_api_client::MockLoanApiClient;
use crate::provider::loan_api_client::error::LoanApiClientError;
use crate::service::common_dto::DocumentDTO;
use crate::service::error::{BusinessLogicError, ServiceError, ValidationError};

fn setup(loan_api_client: MockLoanApiClient) -> VerificationService {
    VerificationService::new(
        Arc::new(loan_api_client),
        RetryPolicy {
            retries: 2,
            delay: Default::default(),
        },
    )
}

fn dummy_verification(id: &str, status: VerificationStatus) -> Verification {
    Verification {
        id: VerificationId::from(id),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        date_of_birth: "1815-12-10".to_owned(),
        id_number: "X1".to_owned(),
        status,
        created_at: None,
        updated_at: None,
    }
}

fn complete_request() -> SubmitVerificationRequestDTO {
    SubmitVerificationRequestDTO {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        date_of_birth: "1815-12-10".to_owned(),
        id_number: "X1".to_owned(),
        id_document: Some(DocumentDTO {
            content: b"%PDF".to_vec(),
            media_type: "application/pdf".to_owned(),
            file_name: "passport.pdf".to_owned(),
        }),
    }
}

#[tokio::test]
async fn test_submit_verification_success() {
    let mut loan_api_client = MockLoanApiClient::new();
    loan_api_client
        .expect_submit_verification()
        .withf(|draft| {
            draft.first_name == "Ada"
                && draft.id_number == "X1"
                && draft.document.file_name == "passport.pdf"
                && draft.document.content == b"%PDF"
        })
        .times(1)
        .returning(|_| Ok(dummy_verification("v1", VerificationStatus::Pending)));

    let verification = setup(loan_api_client)
        .submit_verification(complete_request())
        .await
        .unwrap();

    assert_eq!(verification.status, VerificationStatus::Pending);
}

#[rstest]
#[case::first_name(SubmitVerificationRequestDTO { first_name: " ".to_owned(), ..complete_request() }, vec!["FirstName"])]
#[case::date_of_birth(SubmitVerificationRequestDTO { date_of_birth: String::new(), ..complete_request() }, vec!["DateOfBirth"])]
#[case::document(SubmitVerificationRequestDTO { id_document: None, ..complete_request() }, vec!["IdDocument"])]
#[case::empty_document(
    SubmitVerificationRequestDTO {
        id_document: Some(DocumentDTO {
            content: vec![],
            media_type: "image/png".to_owned(),
            file_name: "id.png".to_owned(),
        }),
        ..complete_request()
    },
    vec!["IdDocument"]
)]
#[case::everything(SubmitVerificationRequestDTO::default(), vec!["FirstName", "LastName", "DateOfBirth", "IdNumber", "IdDocument"])]
#[tokio::test]
async fn test_submit_verification_missing_fields_sends_nothing(
    #[case] request: SubmitVerificationRequestDTO,
    #[case] expected: Vec<&'static str>,
) {
    let mut loan_api_client = MockLoanApiClient::new();
    loan_api_client.expect_submit_verification().never();

    let result = setup(loan_api_client).submit_verification(request).await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::MissingFields(fields))) if fields == expected
    ));
}

#[tokio::test]
async fn test_submit_verification_is_not_retried() {
    let mut loan_api_client = MockLoanApiClient::new();
    loan_api_client
        .expect_submit_verification()
        .times(1)
        .returning(|_| Err(LoanApiClientError::NetworkError("timeout".to_owned())));

    let result = setup(loan_api_client)
        .submit_verification(complete_request())
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::LoanApi(LoanApiClientError::NetworkError(_)))
    ));
}

#[tokio::test]
async fn test_review_verification_approve() {
    let mut loan_api_client = MockLoanApiClient::new();
    loan_api_client
        .expect_fetch_verifications()
        .returning(|| Ok(vec![dummy_verification("v1", VerificationStatus::Pending)]));
    loan_api_client
        .expect_approve_verification()
        .with(eq(VerificationId::from("v1")))
        .times(1)
        .returning(|_| Ok(dummy_verification("v1", VerificationStatus::Approved)));

    let reviewed = setup(loan_api_client)
        .review_verification(&VerificationId::from("v1"), ReviewDecision::Approve)
        .await
        .unwrap();

    assert_eq!(reviewed.status, VerificationStatus::Approved);
}

#[tokio::test]
async fn test_review_verification_approved_record_is_final() {
    let mut loan_api_client = MockLoanApiClient::new();
    loan_api_client
        .expect_fetch_verifications()
        .returning(|| Ok(vec![dummy_verification("v1", VerificationStatus::Approved)]));
    loan_api_client.expect_reject_verification().never();

    let result = setup(loan_api_client)
        .review_verification(&VerificationId::from("v1"), ReviewDecision::Reject)
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::VerificationAlreadyApproved(_)
        ))
    ));
}

#[tokio::test]
async fn test_review_verification_unknown_id() {
    let mut loan_api_client = MockLoanApiClient::new();
    loan_api_client
        .expect_fetch_verifications()
        .returning(|| Ok(vec![]));

    let result = setup(loan_api_client)
        .review_verification(&VerificationId::from("v9"), ReviewDecision::Reject)
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::VerificationNotFound(_)
        ))
    ));
}

#[tokio::test]
async fn test_get_verification_status_retries() {
    let mut loan_api_client = MockLoanApiClient::new();
    let mut seq = mockall::Sequence::new();
    loan_api_client
        .expect_fetch_verification_status()
        .times(2)
        .in_sequence(&mut seq)
        .returning(|| Err(LoanApiClientError::ServerError { status: 502 }));
    loan_api_client
        .expect_fetch_verification_status()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(Some(VerificationStatus::Pending)));

    let status = setup(loan_api_client)
        .get_verification_status()
        .await
        .unwrap();

    assert_eq!(status, Some(VerificationStatus::Pending));
}
