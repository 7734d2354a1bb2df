pub mod http_client;
pub mod loan_api_client;
pub mod session_storage;
