use secrecy::ExposeSecret;

use super::dto::{LoginRequestDTO, RegisterRequestDTO};
use crate::service::common_validator::{missing_document, require_text};
use crate::service::error::ValidationError;
use crate::util::password_strength;

pub(super) fn validate_login_request(request: &LoginRequestDTO) -> Result<(), ValidationError> {
    let mut missing = vec![];
    require_text(&mut missing, "email", &request.email);
    require_text(&mut missing, "password", request.password.expose_secret());

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

pub(super) fn validate_register_request(
    request: &RegisterRequestDTO,
) -> Result<(), ValidationError> {
    let mut missing = vec![];
    require_text(&mut missing, "fullName", &request.full_name);
    require_text(&mut missing, "email", &request.email);
    require_text(&mut missing, "password", request.password.expose_secret());
    require_text(&mut missing, "contact", &request.contact);
    if missing_document(request.id_document.as_ref()) {
        missing.push("IdDocument");
    }

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    if !password_strength::evaluate(request.password.expose_secret()).is_valid() {
        return Err(ValidationError::WeakPassword);
    }

    Ok(())
}
