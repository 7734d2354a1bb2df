use rust_decimal::Decimal;

use super::dto::CreateLoanRequestDTO;
use crate::model::loan::LoanDraft;
use crate::service::error::ValidationError;

/// Checks the request locally and turns it into the draft sent to the server
pub(super) fn validate_create_loan_request(
    request: CreateLoanRequestDTO,
) -> Result<LoanDraft, ValidationError> {
    let Some(loan_product_id) = request
        .loan_product_id
        .filter(|id| !id.as_str().trim().is_empty())
    else {
        return Err(ValidationError::MissingFields(vec!["loanProductId"]));
    };

    if request.amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount(request.amount));
    }

    Ok(LoanDraft {
        loan_product_id,
        amount: request.amount,
        guarantor_user_ids: request
            .guarantor_user_ids
            .into_iter()
            .filter(|id| !id.as_str().trim().is_empty())
            .collect(),
    })
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;
    use shared_types::{LoanProductId, UserId};

    use super::*;

    #[test]
    fn test_valid_request_becomes_draft() {
        let draft = validate_create_loan_request(CreateLoanRequestDTO {
            loan_product_id: Some(LoanProductId::from("P1")),
            amount: Decimal::new(500, 0),
            guarantor_user_ids: vec![UserId::from(" "), UserId::from("u2")],
        })
        .unwrap();

        assert_eq!(draft.loan_product_id, LoanProductId::from("P1"));
        assert_eq!(draft.amount, Decimal::new(500, 0));
        assert_eq!(draft.guarantor_user_ids, vec![UserId::from("u2")]);
    }

    #[test]
    fn test_blank_product_is_missing() {
        let result = validate_create_loan_request(CreateLoanRequestDTO {
            loan_product_id: Some(LoanProductId::from("  ")),
            amount: Decimal::ONE,
            guarantor_user_ids: vec![],
        });

        assert!(matches!(
            result,
            Err(ValidationError::MissingFields(fields)) if fields == vec!["loanProductId"]
        ));
    }
}
