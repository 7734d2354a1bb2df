//! Persistence backend of the session store. Implementations hold plain key/value strings,
//! e.g. the platform key-value store on mobile or a file on desktop.

use thiserror::Error;

pub mod file;
pub mod memory;

#[derive(Debug, Error)]
pub enum SessionStorageError {
    #[error("IO error: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Corrupted storage: `{0}`")]
    Corrupted(#[from] serde_json::Error),
    #[error("Native storage error: `{0}`")]
    Native(String),
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait SessionStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStorageError>;
    async fn remove(&self, key: &str) -> Result<(), SessionStorageError>;
}
