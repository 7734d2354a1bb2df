use super::dto::SubmitVerificationRequestDTO;
use crate::service::common_validator::{missing_document, require_text};
use crate::service::error::ValidationError;

/// Reports every missing field at once, named as on the wire.
pub(crate) fn validate_submit_request(
    request: &SubmitVerificationRequestDTO,
) -> Result<(), ValidationError> {
    let mut missing = vec![];
    require_text(&mut missing, "FirstName", &request.first_name);
    require_text(&mut missing, "LastName", &request.last_name);
    require_text(&mut missing, "DateOfBirth", &request.date_of_birth);
    require_text(&mut missing, "IdNumber", &request.id_number);
    if missing_document(request.id_document.as_ref()) {
        missing.push("IdDocument");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}
