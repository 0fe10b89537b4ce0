use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use super::{KeyValueStore, MemoryStore, StorageKey};
use crate::{
    error::AppResult,
    models::{OnboardingStatus, PreferenceProfile},
};

const COMPLETED_FLAG: &str = "true";

/// Typed access to the JSON documents kept in device storage
#[derive(Clone)]
pub struct DeviceStorage {
    store: Arc<dyn KeyValueStore>,
}

impl DeviceStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Storage that lives only as long as the process
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn backend(&self) -> &'static str {
        self.store.name()
    }

    /// Reads and deserializes a document
    ///
    /// A document that no longer parses is logged and treated as missing.
    async fn get_json<T: DeserializeOwned>(&self, key: StorageKey) -> AppResult<Option<T>> {
        let Some(json) = self.store.get(&key.to_string()).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&json) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Discarding unreadable stored document");
                Ok(None)
            }
        }
    }

    async fn set_json<T: Serialize>(&self, key: StorageKey, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(&key.to_string(), json).await
    }

    /// Restores the onboarding state
    ///
    /// The profile is only returned when the completion flag is also set.
    pub async fn load_onboarding(&self) -> AppResult<OnboardingStatus> {
        let completed = self
            .store
            .get(&StorageKey::QuestionnaireCompleted.to_string())
            .await?
            .is_some_and(|flag| flag == COMPLETED_FLAG);

        let profile: Option<PreferenceProfile> = if completed {
            self.get_json(StorageKey::QuestionnaireResponses).await?
        } else {
            None
        };

        Ok(OnboardingStatus { completed, profile })
    }

    /// Stored profile, if the questionnaire was submitted
    pub async fn load_profile(&self) -> AppResult<Option<PreferenceProfile>> {
        Ok(self.load_onboarding().await?.profile)
    }

    /// Persists a submitted questionnaire, replacing any previous profile
    pub async fn complete_questionnaire(&self, profile: &PreferenceProfile) -> AppResult<()> {
        self.set_json(StorageKey::QuestionnaireResponses, profile)
            .await?;
        self.store
            .set(
                &StorageKey::QuestionnaireCompleted.to_string(),
                COMPLETED_FLAG.to_string(),
            )
            .await?;
        tracing::info!(interests = profile.interests.len(), "Preference profile saved");
        Ok(())
    }

    /// Marks onboarding as done without storing a profile
    pub async fn skip_questionnaire(&self) -> AppResult<()> {
        self.store
            .set(
                &StorageKey::QuestionnaireCompleted.to_string(),
                COMPLETED_FLAG.to_string(),
            )
            .await?;
        tracing::info!("Questionnaire skipped");
        Ok(())
    }

    /// Clears the completion flag and the stored profile
    pub async fn reset_questionnaire(&self) -> AppResult<()> {
        self.store
            .delete(&StorageKey::QuestionnaireCompleted.to_string())
            .await?;
        self.store
            .delete(&StorageKey::QuestionnaireResponses.to_string())
            .await?;
        Ok(())
    }

    pub async fn favorites(&self) -> AppResult<BTreeSet<String>> {
        Ok(self
            .get_json(StorageKey::FavoriteEvents)
            .await?
            .unwrap_or_default())
    }

    /// Adds or removes an event from the favorites
    ///
    /// Returns true if the event is a favorite after the call.
    pub async fn toggle_favorite(&self, event_id: &str) -> AppResult<bool> {
        let mut favorites = self.favorites().await?;

        let is_favorite = if favorites.remove(event_id) {
            false
        } else {
            favorites.insert(event_id.to_string());
            true
        };

        self.set_json(StorageKey::FavoriteEvents, &favorites).await?;
        tracing::debug!(event_id = %event_id, is_favorite, "Favorite toggled");
        Ok(is_favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetTier;

    fn sample_profile() -> PreferenceProfile {
        PreferenceProfile::new(["Musique"], ["Paris"], BudgetTier::Low)
    }

    #[tokio::test]
    async fn test_fresh_storage_shows_questionnaire() {
        let storage = DeviceStorage::in_memory();
        let status = storage.load_onboarding().await.unwrap();

        assert!(status.should_show_questionnaire());
        assert_eq!(status.profile, None);
    }

    #[tokio::test]
    async fn test_completed_questionnaire_restores_profile() {
        let storage = DeviceStorage::in_memory();
        storage.complete_questionnaire(&sample_profile()).await.unwrap();

        let status = storage.load_onboarding().await.unwrap();
        assert!(status.completed);
        assert_eq!(status.profile, Some(sample_profile()));
    }

    #[tokio::test]
    async fn test_resubmission_replaces_profile() {
        let storage = DeviceStorage::in_memory();
        storage.complete_questionnaire(&sample_profile()).await.unwrap();

        let replacement = PreferenceProfile::new(["Sport"], ["Lyon"], BudgetTier::High);
        storage.complete_questionnaire(&replacement).await.unwrap();

        assert_eq!(storage.load_profile().await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn test_skip_sets_flag_without_profile() {
        let storage = DeviceStorage::in_memory();
        storage.skip_questionnaire().await.unwrap();

        let status = storage.load_onboarding().await.unwrap();
        assert!(status.completed);
        assert!(!status.should_show_questionnaire());
        assert_eq!(status.profile, None);
    }

    #[tokio::test]
    async fn test_profile_without_flag_is_ignored() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(
                &StorageKey::QuestionnaireResponses.to_string(),
                serde_json::to_string(&sample_profile()).unwrap(),
            )
            .await
            .unwrap();

        let storage = DeviceStorage::new(store);
        let status = storage.load_onboarding().await.unwrap();
        assert!(!status.completed);
        assert_eq!(status.profile, None);
    }

    #[tokio::test]
    async fn test_corrupt_profile_is_treated_as_missing() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(&StorageKey::QuestionnaireCompleted.to_string(), "true".to_string())
            .await
            .unwrap();
        store
            .set(
                &StorageKey::QuestionnaireResponses.to_string(),
                "{not json".to_string(),
            )
            .await
            .unwrap();

        let storage = DeviceStorage::new(store);
        let status = storage.load_onboarding().await.unwrap();
        assert!(status.completed);
        assert_eq!(status.profile, None);
    }

    #[tokio::test]
    async fn test_reset_clears_onboarding() {
        let storage = DeviceStorage::in_memory();
        storage.complete_questionnaire(&sample_profile()).await.unwrap();
        storage.reset_questionnaire().await.unwrap();

        let status = storage.load_onboarding().await.unwrap();
        assert!(status.should_show_questionnaire());
        assert_eq!(status.profile, None);
    }

    #[tokio::test]
    async fn test_toggle_favorite() {
        let storage = DeviceStorage::in_memory();

        assert!(storage.toggle_favorite("3").await.unwrap());
        assert!(storage.toggle_favorite("1").await.unwrap());
        let favorites: Vec<String> = storage.favorites().await.unwrap().into_iter().collect();
        assert_eq!(favorites, vec!["1", "3"]);

        assert!(!storage.toggle_favorite("3").await.unwrap());
        let favorites: Vec<String> = storage.favorites().await.unwrap().into_iter().collect();
        assert_eq!(favorites, vec!["1"]);
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(DeviceStorage::in_memory().backend(), "memory");
    }
}
