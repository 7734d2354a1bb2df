pub mod auth;
pub mod common_dto;
pub(crate) mod common_mapper;
pub(crate) mod common_validator;
pub mod error;
pub mod loan;
pub mod notification;
pub mod user;
pub mod verification;
pub mod workflow;
