use std::{collections::HashMap, path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// JSON file-backed store for one document: a map from string id to
/// record, held in memory and flushed to disk whole on every mutation.
///
/// All mutating access goes through the write half of a single
/// `RwLock`, so two concurrent writers against the same document
/// serialize instead of racing read-modify-write cycles on the file.
#[derive(Clone)]
pub struct DocumentStore<R> {
    inner: Arc<RwLock<HashMap<String, R>>>,
    file_path: PathBuf,
}

impl<R> DocumentStore<R>
where
    R: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Open the document at `path`, creating parent directories and
    /// seeding a missing or empty file with `{}`. A present but
    /// unparseable file is a storage error, not something to silently
    /// overwrite.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: HashMap<String, R> = match fs::read(&file_path).await {
            Ok(bytes) if !bytes.iter().all(u8::is_ascii_whitespace) => {
                serde_json::from_slice(&bytes)
                    .map_err(|e| ServiceError::Storage(format!("{}: {}", file_path.display(), e)))?
            }
            _ => {
                let empty: HashMap<String, R> = HashMap::new();
                fs::write(&file_path, b"{}")
                    .await
                    .map_err(|e| ServiceError::Storage(e.to_string()))?;
                empty
            }
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(map)), file_path }))
    }

    async fn save(&self) -> Result<(), ServiceError> {
        let map = self.inner.read().await;
        let data =
            serde_json::to_vec_pretty(&*map).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }

    /// All records, in the map's (unspecified) iteration order.
    pub async fn list(&self) -> Vec<R> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Option<R> {
        let map = self.inner.read().await;
        map.get(id).cloned()
    }

    pub async fn contains(&self, id: &str) -> bool {
        let map = self.inner.read().await;
        map.contains_key(id)
    }

    /// Insert or overwrite the record under `id` and persist.
    pub async fn insert(&self, id: String, record: R) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        map.insert(id, record);
        drop(map);
        self.save().await
    }

    /// Mutate the record under `id` in place and persist. Fails with
    /// `NotFound` when the id has no record.
    pub async fn update_entry<F>(&self, id: &str, f: F) -> Result<(), ServiceError>
    where
        F: FnOnce(&mut R),
    {
        let mut map = self.inner.write().await;
        let record = map
            .get_mut(id)
            .ok_or_else(|| ServiceError::NotFound(format!("no record under id {}", id)))?;
        f(record);
        drop(map);
        self.save().await
    }
}
