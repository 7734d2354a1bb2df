use std::sync::{Arc, PoisonError, RwLock};

use secrecy::{ExposeSecret, SecretString};

use crate::provider::session_storage::SessionStorage;

/// Owner of the authentication token.
///
/// The in-memory value is authoritative for the lifetime of the process, the persisted
/// copy only seeds it on start. Failures of the persistence backend are logged and never
/// roll the in-memory value back.
pub struct SessionStore {
    token: RwLock<Option<SecretString>>,
    storage: Arc<dyn SessionStorage>,
    storage_key: String,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>, storage_key: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(None),
            storage,
            storage_key: storage_key.into(),
        }
    }

    /// Seeds the in-memory token from the persisted copy, returns whether a session exists.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn load(&self) -> bool {
        match self.storage.get(&self.storage_key).await {
            Ok(Some(token)) if !token.is_empty() => {
                self.replace(Some(SecretString::from(token)));
                true
            }
            Ok(_) => false,
            Err(error) => {
                tracing::warn!(%error, "Failed to load session token");
                false
            }
        }
    }

    pub fn token(&self) -> Option<SecretString> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn set_token(&self, token: SecretString) {
        let persisted = token.expose_secret().to_owned();
        self.replace(Some(token));

        if let Err(error) = self.storage.set(&self.storage_key, &persisted).await {
            tracing::error!(%error, "Failed to persist session token");
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn clear(&self) {
        self.replace(None);

        if let Err(error) = self.storage.remove(&self.storage_key).await {
            tracing::error!(%error, "Failed to remove persisted session token");
        }
    }

    fn replace(&self, token: Option<SecretString>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }
}
