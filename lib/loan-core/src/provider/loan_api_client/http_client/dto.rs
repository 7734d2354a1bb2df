use indexmap::IndexMap;
use one_dto_mapper::Into;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{LoanId, LoanProductId, UserId, VerificationId};
use time::OffsetDateTime;

use crate::model::loan::{Loan, LoanDraft, LoanStatus};
use crate::model::loan_product::LoanProduct;
use crate::model::notification::Notification;
use crate::model::user::{User, UserRole};
use crate::model::verification::{Verification, VerificationStatus};
use crate::util::timestamp;

/// Lists are returned either bare or wrapped as `{"data": [...]}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum ListResponseRestDTO<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(default = "Vec::new")]
        data: Vec<T>,
    },
}

impl<T> ListResponseRestDTO<T> {
    pub(super) fn into_vec(self) -> Vec<T> {
        match self {
            ListResponseRestDTO::Bare(values) => values,
            ListResponseRestDTO::Wrapped { data } => data,
        }
    }
}

/// ASP.NET style problem details, `errors` maps field names to messages
#[derive(Debug, Default, Deserialize)]
pub(super) struct ProblemDetailsRestDTO {
    #[serde(default)]
    pub errors: Option<IndexMap<String, Value>>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct LoginRequestRestDTO<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct LoginResponseRestDTO {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserRestDTO {
    pub id: UserId,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl From<UserRestDTO> for User {
    fn from(value: UserRestDTO) -> Self {
        let role = match value.role.as_deref() {
            None | Some("") => UserRole::default(),
            Some(role) => role.parse().unwrap_or(UserRole::Other(role.to_owned())),
        };

        Self {
            id: value.id,
            full_name: value.full_name,
            email: value.email,
            contact: value.contact,
            role,
        }
    }
}

#[derive(Debug, Deserialize, Into)]
#[into(LoanProduct)]
#[serde(rename_all = "camelCase")]
pub(super) struct LoanProductRestDTO {
    pub id: LoanProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub interest_rate: Option<Decimal>,
    #[serde(default)]
    pub max_amount: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LoanRestDTO {
    pub id: LoanId,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub loan_product_id: Option<LoanProductId>,
    #[serde(default)]
    pub guarantor_user_ids: Option<Vec<UserId>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_repayable: Option<Decimal>,
    #[serde(default)]
    pub interest_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub due_date: Option<OffsetDateTime>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<OffsetDateTime>,
}

impl From<LoanRestDTO> for Loan {
    fn from(value: LoanRestDTO) -> Self {
        let status = value
            .status
            .as_deref()
            .and_then(|status| status.parse().ok())
            .unwrap_or(LoanStatus::Unknown);

        Self {
            id: value.id,
            amount: value.amount,
            loan_product_id: value.loan_product_id,
            guarantor_user_ids: value.guarantor_user_ids.unwrap_or_default(),
            status,
            total_repayable: value.total_repayable,
            interest_rate: value.interest_rate,
            due_date: value.due_date,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateLoanRequestRestDTO<'a> {
    pub loan_product_id: &'a LoanProductId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub guarantor_user_ids: &'a [UserId],
    pub status: &'static str,
}

impl<'a> From<&'a LoanDraft> for CreateLoanRequestRestDTO<'a> {
    fn from(value: &'a LoanDraft) -> Self {
        Self {
            loan_product_id: &value.loan_product_id,
            amount: value.amount,
            guarantor_user_ids: &value.guarantor_user_ids,
            status: "Pending",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct VerificationRestDTO {
    pub id: VerificationId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub id_number: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub updated_at: Option<OffsetDateTime>,
}

impl From<VerificationRestDTO> for Verification {
    fn from(value: VerificationRestDTO) -> Self {
        let status = value
            .status
            .as_deref()
            .and_then(parse_verification_status)
            .unwrap_or(VerificationStatus::NotSubmitted);

        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            date_of_birth: value.date_of_birth,
            id_number: value.id_number,
            status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct VerificationStatusRestDTO {
    #[serde(default)]
    pub status: Option<String>,
}

impl VerificationStatusRestDTO {
    pub(super) fn status(&self) -> Option<VerificationStatus> {
        self.status.as_deref().and_then(parse_verification_status)
    }
}

fn parse_verification_status(value: &str) -> Option<VerificationStatus> {
    let parsed = value.parse().ok();
    if parsed.is_none() {
        tracing::warn!(%value, "Unknown verification status");
    }
    parsed
}

#[derive(Debug, Deserialize, Into)]
#[into(Notification)]
#[serde(rename_all = "camelCase")]
pub(super) struct NotificationRestDTO {
    pub id: i64,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub read: bool,
}
