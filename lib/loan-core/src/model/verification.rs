use mime::Mime;
use shared_types::VerificationId;
use strum::{Display, EnumString};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumString)]
pub enum VerificationStatus {
    NotSubmitted,
    Pending,
    Approved,
    Rejected,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Verification {
    pub id: VerificationId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub id_number: String,
    pub status: VerificationStatus,
    pub created_at: Option<OffsetDateTime>,
    pub updated_at: Option<OffsetDateTime>,
}

impl Verification {
    /// Approved records can no longer be changed by anyone.
    pub fn is_final(&self) -> bool {
        self.status == VerificationStatus::Approved
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IdDocument {
    pub content: Vec<u8>,
    pub media_type: Mime,
    pub file_name: String,
}

/// Validated identity submission, not yet known to the server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerificationDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub id_number: String,
    pub document: IdDocument,
}
