pub mod loan;
pub mod loan_product;
pub mod notification;
pub mod user;
pub mod verification;
