use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::document_store::DocumentStore;
use models::student::StudentProfile;

/// File-backed store for student profiles, persisted as a JSON object
/// keyed by student id.
#[derive(Clone)]
pub struct StudentStore {
    store: Arc<DocumentStore<StudentProfile>>,
}

impl StudentStore {
    /// Open the students document at the given path. Creates an empty
    /// document if the file is missing.
    pub async fn open<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = DocumentStore::<StudentProfile>::open(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// Register a student from a raw request body. Overwrites any
    /// prior profile under the same id.
    pub async fn register(&self, body: Map<String, Value>) -> Result<(), ServiceError> {
        let profile = StudentProfile::from_registration(body)
            .map_err(|_| ServiceError::Validation("Student ID is required".into()))?;
        let id = profile.id.clone();
        self.store.insert(id.clone(), profile).await?;
        info!(student_id = %id, "student profile saved");
        Ok(())
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.store.contains(id).await
    }
}
