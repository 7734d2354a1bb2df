use rust_decimal::Decimal;
use shared_types::LoanProductId;

#[derive(Clone, Debug, PartialEq)]
pub struct LoanProduct {
    pub id: LoanProductId,
    pub name: String,
    pub description: Option<String>,
    pub interest_rate: Option<Decimal>,
    pub max_amount: Option<Decimal>,
}
