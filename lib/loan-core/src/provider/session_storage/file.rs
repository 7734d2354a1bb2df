use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::fs;
use tokio::sync::Mutex;

use super::{SessionStorage, SessionStorageError};

/// Stores all values as one JSON object in a single file.
pub struct FileSessionStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, SessionStorageError> {
        match fs::read(&self.path).await {
            Ok(content) if content.is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_slice(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), SessionStorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // atomic replace
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, serde_json::to_vec(values)?).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl SessionStorage for FileSessionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStorageError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStorageError> {
        let _guard = self.lock.lock().await;
        let mut values = self.read_all().await?;
        values.insert(key.to_owned(), value.to_owned());
        self.write_all(&values).await
    }

    async fn remove(&self, key: &str) -> Result<(), SessionStorageError> {
        let _guard = self.lock.lock().await;
        let mut values = self.read_all().await?;
        if values.remove(key).is_some() {
            self.write_all(&values).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_values_survive_a_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let storage = FileSessionStorage::new(&path);
        assert_eq!(storage.get("token").await.unwrap(), None);
        storage.set("token", "abc123").await.unwrap();

        let reopened = FileSessionStorage::new(&path);
        assert_eq!(
            reopened.get("token").await.unwrap().as_deref(),
            Some("abc123")
        );

        reopened.remove("token").await.unwrap();
        assert_eq!(storage.get("token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupted_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"not json").unwrap();

        let storage = FileSessionStorage::new(&path);
        assert!(matches!(
            storage.get("token").await,
            Err(SessionStorageError::Corrupted(_))
        ));
    }
}
