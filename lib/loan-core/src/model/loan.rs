use rust_decimal::Decimal;
use shared_types::{LoanId, LoanProductId, UserId};
use strum::{Display, EnumString};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumString)]
pub enum LoanStatus {
    Pending,
    Approved,
    Rejected,
    /// Any status introduced server-side that this client does not know yet
    Unknown,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Loan {
    pub id: LoanId,
    pub amount: Option<Decimal>,
    pub loan_product_id: Option<LoanProductId>,
    pub guarantor_user_ids: Vec<UserId>,
    pub status: LoanStatus,
    pub total_repayable: Option<Decimal>,
    pub interest_rate: Option<Decimal>,
    pub due_date: Option<OffsetDateTime>,
    pub created_at: Option<OffsetDateTime>,
}

/// Validated loan request, not yet known to the server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanDraft {
    pub loan_product_id: LoanProductId,
    pub amount: Decimal,
    pub guarantor_user_ids: Vec<UserId>,
}
