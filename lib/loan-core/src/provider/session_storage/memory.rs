use std::collections::HashMap;

use tokio::sync::Mutex;

use super::{SessionStorage, SessionStorageError};

/// Non-persistent storage, the session ends with the process.
#[derive(Default)]
pub struct InMemorySessionStorage {
    values: Mutex<HashMap<String, String>>,
}

#[async_trait::async_trait]
impl SessionStorage for InMemorySessionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStorageError> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStorageError> {
        self.values
            .lock()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionStorageError> {
        self.values.lock().await.remove(key);
        Ok(())
    }
}
