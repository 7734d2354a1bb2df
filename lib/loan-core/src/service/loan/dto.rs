use rust_decimal::Decimal;
use shared_types::{LoanProductId, UserId};

use crate::model::loan::Loan;

#[derive(Clone, Debug, Default)]
pub struct CreateLoanRequestDTO {
    pub loan_product_id: Option<LoanProductId>,
    pub amount: Decimal,
    /// Empty when no guarantor was picked
    pub guarantor_user_ids: Vec<UserId>,
}

/// Observable state of the loan list screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoanListState {
    pub loans: Vec<Loan>,
    pub loading: bool,
    /// Reason of the last failed fetch, cleared by the next successful one
    pub error: Option<String>,
    pub loaded: bool,
}
