use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::document_store::DocumentStore;
use models::notification::Notification;
use models::tutor::{TutorListing, TutorProfile};

/// File-backed store for tutor profiles, persisted as a JSON object
/// keyed by tutor id.
#[derive(Clone)]
pub struct TutorStore {
    store: Arc<DocumentStore<TutorProfile>>,
}

impl TutorStore {
    /// Open the tutors document at the given path. Creates an empty
    /// document if the file is missing.
    pub async fn open<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = DocumentStore::<TutorProfile>::open(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// Register a tutor from a raw request body. Overwrites any prior
    /// profile under the same id, notification history included, and
    /// starts the new profile with an empty history.
    pub async fn register(&self, body: Map<String, Value>) -> Result<(), ServiceError> {
        let profile = TutorProfile::from_registration(body)
            .map_err(|_| ServiceError::Validation("Tutor ID is required".into()))?;
        let id = profile.id.clone();
        self.store.insert(id.clone(), profile).await?;
        info!(tutor_id = %id, "tutor profile saved");
        Ok(())
    }

    /// All tutors in their public shape, `notifications` stripped.
    pub async fn list_public(&self) -> Vec<TutorListing> {
        self.store.list().await.iter().map(TutorProfile::listing).collect()
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.store.contains(id).await
    }

    /// Notification history for a tutor, oldest first.
    pub async fn notifications(&self, id: &str) -> Result<Vec<Notification>, ServiceError> {
        match self.store.get(id).await {
            Some(profile) => Ok(profile.notifications),
            None => Err(ServiceError::not_found("tutor")),
        }
    }

    /// Append a notification to a tutor's history and persist.
    pub async fn notify(&self, id: &str, notification: Notification) -> Result<(), ServiceError> {
        self.store
            .update_entry(id, |profile| profile.notifications.push(notification))
            .await
            .map_err(|e| match e {
                ServiceError::NotFound(_) => ServiceError::not_found("tutor"),
                other => other,
            })
    }
}
