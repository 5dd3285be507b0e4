//! File-backed storage for uploaded configuration documents.
//!
//! Documents live under a root directory, one file per upload, next to a
//! `metadata.json` index listing them in upload order.

use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::ManagerError;
use crate::model::ConfigRecord;

/// Store of uploaded device-description documents.
pub struct ConfigStore {
    root: PathBuf,
    metadata_path: PathBuf,
    /// Serializes read-modify-write cycles on the metadata index.
    index_lock: Mutex<()>,
}

impl ConfigStore {
    /// Opens the store, creating the directory and an empty index on first
    /// use.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ManagerError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;

        let metadata_path = root.join("metadata.json");
        if !metadata_path.exists() {
            std::fs::write(&metadata_path, "[]")?;
        }

        debug!("Configuration store opened at {}", root.display());
        Ok(ConfigStore {
            root,
            metadata_path,
            index_lock: Mutex::new(()),
        })
    }

    /// All stored records, in upload order. A blank index reads as empty.
    pub async fn list(&self) -> Result<Vec<ConfigRecord>, ManagerError> {
        let raw = fs::read_to_string(&self.metadata_path).await?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    /// Stores an uploaded document under a fresh id and indexes it.
    pub async fn save(
        &self,
        original_name: &str,
        contents: &[u8],
    ) -> Result<ConfigRecord, ManagerError> {
        let id = Uuid::new_v4();
        let extension = Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("xml");
        let stored_name = format!("{}.{}", id, extension);
        fs::write(self.root.join(&stored_name), contents).await?;

        let record = ConfigRecord {
            id,
            filename: original_name.to_string(),
            stored_name,
            uploaded_at: chrono::Utc::now(),
            active: false,
        };

        let _guard = self.index_lock.lock().await;
        let mut records = self.list().await?;
        records.push(record.clone());
        self.persist(&records).await?;

        info!("Stored configuration '{}' as {}", original_name, record.id);
        Ok(record)
    }

    /// Looks a record up by id.
    pub async fn find(&self, id: Uuid) -> Result<ConfigRecord, ManagerError> {
        self.list()
            .await?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or(ManagerError::NotFound)
    }

    /// Reads the stored document for `id` to completion.
    ///
    /// The file handle is scoped to this call: it is opened, drained, and
    /// released before returning on every path.
    pub async fn read_document(&self, id: Uuid) -> Result<String, ManagerError> {
        let record = self.find(id).await?;
        Ok(fs::read_to_string(self.root.join(&record.stored_name)).await?)
    }

    /// Marks `id` as the active configuration; at most one record carries
    /// the flag.
    pub async fn set_active(&self, id: Uuid) -> Result<(), ManagerError> {
        let _guard = self.index_lock.lock().await;
        let mut records = self.list().await?;
        if !records.iter().any(|record| record.id == id) {
            return Err(ManagerError::NotFound);
        }
        for record in &mut records {
            record.active = record.id == id;
        }
        self.persist(&records).await
    }

    async fn persist(&self, records: &[ConfigRecord]) -> Result<(), ManagerError> {
        let body = serde_json::to_string_pretty(records)?;
        fs::write(&self.metadata_path, body).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigStore;
    use crate::error::ManagerError;
    use uuid::Uuid;

    fn open_store(dir: &tempfile::TempDir) -> ConfigStore {
        ConfigStore::open(dir.path()).expect("store should open")
    }

    #[tokio::test]
    async fn save_then_list_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let record = store
            .save("unit.xml", b"<device host-name=\"UNIT01\"/>")
            .await
            .unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, record.id);
        assert_eq!(listed[0].filename, "unit.xml");
        assert!(!listed[0].active);

        let document = store.read_document(record.id).await.unwrap();
        assert!(document.contains("UNIT01"));
    }

    #[tokio::test]
    async fn listing_preserves_upload_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        store.save("first.xml", b"<device/>").await.unwrap();
        store.save("second.xml", b"<device/>").await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed[0].filename, "first.xml");
        assert_eq!(listed[1].filename, "second.xml");
    }

    #[tokio::test]
    async fn set_active_is_exclusive() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let first = store.save("first.xml", b"<device/>").await.unwrap();
        let second = store.save("second.xml", b"<device/>").await.unwrap();

        store.set_active(second.id).await.unwrap();
        let listed = store.list().await.unwrap();
        assert!(!listed[0].active);
        assert!(listed[1].active);

        // Activating another record clears the previous flag.
        store.set_active(first.id).await.unwrap();
        let listed = store.list().await.unwrap();
        assert!(listed[0].active);
        assert!(!listed[1].active);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let result = store.read_document(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ManagerError::NotFound)));

        let result = store.set_active(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ManagerError::NotFound)));
    }

    #[tokio::test]
    async fn blank_index_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        std::fs::write(dir.path().join("metadata.json"), "  \n").unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}
