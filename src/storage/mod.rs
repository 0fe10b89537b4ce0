use std::fmt::Display;

use crate::error::AppResult;

pub mod device;
pub mod memory;
pub mod redis;

pub use device::DeviceStorage;
pub use memory::MemoryStore;
pub use self::redis::{create_redis_client, RedisStore};

/// Keys of the documents kept in device storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// "true" once the questionnaire was submitted or skipped
    QuestionnaireCompleted,
    /// Serialized preference profile
    QuestionnaireResponses,
    /// Serialized list of favorite event ids
    FavoriteEvents,
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageKey::QuestionnaireCompleted => write!(f, "hasCompletedQuestionnaire"),
            StorageKey::QuestionnaireResponses => write!(f, "questionnaireResponses"),
            StorageKey::FavoriteEvents => write!(f, "favoriteEvents"),
        }
    }
}

/// String key-value storage backend
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    async fn set(&self, key: &str, value: String) -> AppResult<()>;

    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Backend name for logging and debugging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_display() {
        assert_eq!(
            StorageKey::QuestionnaireCompleted.to_string(),
            "hasCompletedQuestionnaire"
        );
        assert_eq!(
            StorageKey::QuestionnaireResponses.to_string(),
            "questionnaireResponses"
        );
        assert_eq!(StorageKey::FavoriteEvents.to_string(), "favoriteEvents");
    }
}
