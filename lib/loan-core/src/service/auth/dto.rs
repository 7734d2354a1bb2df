use secrecy::SecretString;

use crate::model::user::UserRole;
use crate::service::common_dto::DocumentDTO;

#[derive(Clone, Debug)]
pub struct LoginRequestDTO {
    pub email: String,
    pub password: SecretString,
}

#[derive(Clone, Debug)]
pub struct RegisterRequestDTO {
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
    /// `User` when not given
    pub role: Option<UserRole>,
    pub contact: String,
    pub id_document: Option<DocumentDTO>,
}
