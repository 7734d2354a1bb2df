use std::sync::Arc;

use loan_core::provider::session_storage::{SessionStorage, SessionStorageError};

use crate::error::NativeStorageError;

/// Persistent key-value storage of the host platform, e.g. shared preferences or the keychain
#[uniffi::export(with_foreign)]
#[async_trait::async_trait]
pub trait NativeSessionStorage: Send + Sync {
    async fn get(&self, key: String) -> Result<Option<String>, NativeStorageError>;
    async fn set(&self, key: String, value: String) -> Result<(), NativeStorageError>;
    async fn remove(&self, key: String) -> Result<(), NativeStorageError>;
}

pub struct NativeSessionStorageWrapper(pub Arc<dyn NativeSessionStorage>);

#[async_trait::async_trait]
impl SessionStorage for NativeSessionStorageWrapper {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStorageError> {
        self.0
            .get(key.to_owned())
            .await
            .map_err(SessionStorageError::from)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStorageError> {
        self.0
            .set(key.to_owned(), value.to_owned())
            .await
            .map_err(SessionStorageError::from)
    }

    async fn remove(&self, key: &str) -> Result<(), SessionStorageError> {
        self.0
            .remove(key.to_owned())
            .await
            .map_err(SessionStorageError::from)
    }
}
