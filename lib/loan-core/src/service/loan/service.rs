use super::LoanService;
use super::dto::CreateLoanRequestDTO;
use super::validator::validate_create_loan_request;
use crate::model::loan::Loan;
use crate::model::loan_product::LoanProduct;
use crate::service::error::ServiceError;

impl LoanService {
    /// Returns the loans of the logged in user
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn get_loan_list(&self) -> Result<Vec<Loan>, ServiceError> {
        Ok(self
            .retry
            .run("fetch_loans", || self.loan_api_client.fetch_loans())
            .await?)
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn get_loan_product_list(&self) -> Result<Vec<LoanProduct>, ServiceError> {
        Ok(self
            .retry
            .run("list_loan_products", || {
                self.loan_api_client.list_loan_products()
            })
            .await?)
    }

    /// Validates the request locally and submits it exactly once
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn create_loan(&self, request: CreateLoanRequestDTO) -> Result<Loan, ServiceError> {
        let draft = validate_create_loan_request(request)?;
        let loan = self.loan_api_client.submit_loan(&draft).await?;
        tracing::info!(id = %loan.id, status = %loan.status, "Loan requested");
        Ok(loan)
    }
}
