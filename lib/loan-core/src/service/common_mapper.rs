use mime::Mime;

use super::common_dto::DocumentDTO;
use super::error::{ServiceError, ValidationError};
use crate::model::verification::IdDocument;
use crate::proto::notice::UserNotice;
use crate::provider::loan_api_client::error::LoanApiClientError;

const DEFAULT_FILE_NAME: &str = "document";

pub(crate) fn document_from_dto(document: DocumentDTO) -> Result<IdDocument, ValidationError> {
    let media_type = document
        .media_type
        .parse::<Mime>()
        .map_err(|_| ValidationError::InvalidMediaType(document.media_type.to_owned()))?;

    let file_name = match document.file_name.trim() {
        "" => DEFAULT_FILE_NAME.to_owned(),
        name => name.to_owned(),
    };

    Ok(IdDocument {
        content: document.content,
        media_type,
        file_name,
    })
}

/// Notice for a failed user action, `on_failure` builds the action specific one
pub(crate) fn failure_notice(
    error: &ServiceError,
    on_failure: impl FnOnce(String) -> UserNotice,
) -> UserNotice {
    match error {
        ServiceError::LoanApi(LoanApiClientError::Unauthorized) => UserNotice::NotLoggedIn,
        ServiceError::Validation(ValidationError::MissingFields(fields)) => {
            UserNotice::MissingFields {
                fields: fields.to_owned(),
            }
        }
        other => on_failure(other.reason()),
    }
}
