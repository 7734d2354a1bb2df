pub mod notice;
pub mod retry;
pub mod session_store;
