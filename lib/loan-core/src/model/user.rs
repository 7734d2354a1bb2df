use secrecy::SecretString;
use shared_types::UserId;
use strum::{Display, EnumString};

use crate::model::verification::IdDocument;

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum UserRole {
    #[default]
    User,
    Admin,
    #[strum(default)]
    Other(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub contact: Option<String>,
    pub role: UserRole,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[derive(Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

#[derive(Clone, Debug)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
    pub role: UserRole,
    pub contact: String,
    pub id_document: IdDocument,
}
