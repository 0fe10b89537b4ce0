//! Event catalog abstraction
//!
//! The catalog is owned by a data-fetch collaborator and read-only for the
//! rest of the service. The bundled implementation serves mock data parsed
//! from a JSON document.

use std::collections::HashSet;
use std::path::Path;

use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::Event,
};

/// Seed catalog compiled into the binary
const BUNDLED_EVENTS: &str = include_str!("../../data/events.json");

/// Trait for event data sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait EventCatalog: Send + Sync {
    /// Returns every event in catalog order
    async fn fetch_events(&self) -> AppResult<Vec<Event>>;

    /// Looks up a single event by id
    async fn find_event(&self, id: &str) -> AppResult<Option<Event>>;

    /// Catalog name for logging and debugging
    fn name(&self) -> &'static str;
}

/// In-memory catalog backed by static mock data
#[derive(Debug, Clone)]
pub struct MockCatalog {
    events: Vec<Event>,
}

impl MockCatalog {
    /// Builds a catalog from a list of events, rejecting duplicate ids
    pub fn new(events: Vec<Event>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for event in &events {
            if !seen.insert(event.id.as_str()) {
                return Err(AppError::InvalidInput(format!(
                    "Duplicate event id in catalog: {}",
                    event.id
                )));
            }
        }

        Ok(Self { events })
    }

    /// Parses a JSON array of events
    pub fn from_json(json: &str) -> AppResult<Self> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        Self::new(events)
    }

    /// The catalog shipped with the service
    pub fn bundled() -> AppResult<Self> {
        Self::from_json(BUNDLED_EVENTS)
    }

    /// Loads a catalog from a JSON file on disk
    pub async fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Internal(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;

        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), events = catalog.len(), "Loaded event catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[async_trait::async_trait]
impl EventCatalog for MockCatalog {
    #[instrument(skip(self))]
    async fn fetch_events(&self) -> AppResult<Vec<Event>> {
        Ok(self.events.clone())
    }

    #[instrument(skip(self))]
    async fn find_event(&self, id: &str) -> AppResult<Option<Event>> {
        Ok(self.events.iter().find(|event| event.id == id).cloned())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
