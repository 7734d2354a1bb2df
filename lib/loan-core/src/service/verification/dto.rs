use crate::service::common_dto::DocumentDTO;

#[derive(Clone, Debug, Default)]
pub struct SubmitVerificationRequestDTO {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub id_number: String,
    pub id_document: Option<DocumentDTO>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}
