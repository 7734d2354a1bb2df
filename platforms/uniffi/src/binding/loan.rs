use loan_core::model::loan::{Loan, LoanStatus};
use loan_core::model::loan_product::LoanProduct;
use loan_core::service::loan::dto::{CreateLoanRequestDTO, LoanListState};
use one_dto_mapper::{From, convert_inner};
use shared_types::{LoanProductId, UserId};

use super::LoanCoreBinding;
use crate::error::BindingError;
use crate::utils::{format_decimal_opt, format_timestamp_opt, parse_amount};

#[uniffi::export(async_runtime = "tokio")]
impl LoanCoreBinding {
    /// Loan list screen became visible, fetches unless already loaded.
    #[uniffi::method]
    pub async fn activate_loan_list(&self) -> Result<LoanListStateBindingDTO, BindingError> {
        let core = self.use_core().await?;
        Ok(core.loan_list.activate().await.into())
    }

    #[uniffi::method]
    pub async fn refresh_loan_list(&self) -> Result<LoanListStateBindingDTO, BindingError> {
        let core = self.use_core().await?;
        Ok(core.loan_list.refresh().await.into())
    }

    /// Results of fetches still in flight are discarded.
    #[uniffi::method]
    pub async fn deactivate_loan_list(&self) -> Result<(), BindingError> {
        let core = self.use_core().await?;
        core.loan_list.deactivate();
        Ok(())
    }

    #[uniffi::method]
    pub async fn get_loan_list_state(&self) -> Result<LoanListStateBindingDTO, BindingError> {
        let core = self.use_core().await?;
        Ok(core.loan_list.state().into())
    }

    #[uniffi::method]
    pub async fn get_loan_products(&self) -> Result<Vec<LoanProductBindingDTO>, BindingError> {
        let core = self.use_core().await?;
        Ok(core
            .loan_service
            .get_loan_product_list()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct CreateLoanRequestBindingDTO {
    pub loan_product_id: Option<String>,
    /// Decimal string, e.g. `"5000"`
    pub amount: String,
    pub guarantor_user_ids: Vec<String>,
}

impl TryFrom<CreateLoanRequestBindingDTO> for CreateLoanRequestDTO {
    type Error = BindingError;

    fn try_from(value: CreateLoanRequestBindingDTO) -> Result<Self, Self::Error> {
        Ok(Self {
            loan_product_id: value
                .loan_product_id
                .filter(|id| !id.trim().is_empty())
                .map(LoanProductId::from),
            amount: parse_amount(&value.amount)?,
            guarantor_user_ids: value.guarantor_user_ids.into_iter().map(UserId::from).collect(),
        })
    }
}

#[derive(Clone, Debug, From, uniffi::Record)]
#[from(Loan)]
pub struct LoanBindingDTO {
    #[from(with_fn_ref = "ToString::to_string")]
    pub id: String,
    #[from(with_fn_ref = format_decimal_opt)]
    pub amount: Option<String>,
    #[from(with_fn = convert_inner)]
    pub loan_product_id: Option<String>,
    #[from(with_fn = convert_inner)]
    pub guarantor_user_ids: Vec<String>,
    pub status: LoanStatusBindingEnum,
    #[from(with_fn_ref = format_decimal_opt)]
    pub total_repayable: Option<String>,
    #[from(with_fn_ref = format_decimal_opt)]
    pub interest_rate: Option<String>,
    #[from(with_fn_ref = format_timestamp_opt)]
    pub due_date: Option<String>,
    #[from(with_fn_ref = format_timestamp_opt)]
    pub created_at: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, From, uniffi::Enum)]
#[from(LoanStatus)]
pub enum LoanStatusBindingEnum {
    Pending,
    Approved,
    Rejected,
    Unknown,
}

#[derive(Clone, Debug, From, uniffi::Record)]
#[from(LoanProduct)]
pub struct LoanProductBindingDTO {
    #[from(with_fn_ref = "ToString::to_string")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[from(with_fn_ref = format_decimal_opt)]
    pub interest_rate: Option<String>,
    #[from(with_fn_ref = format_decimal_opt)]
    pub max_amount: Option<String>,
}

#[derive(Clone, Debug, From, uniffi::Record)]
#[from(LoanListState)]
pub struct LoanListStateBindingDTO {
    #[from(with_fn = convert_inner)]
    pub loans: Vec<LoanBindingDTO>,
    pub loading: bool,
    pub error: Option<String>,
    pub loaded: bool,
}
