use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    services::{EventCatalog, MockCatalog, ReservationBook},
    storage::DeviceStorage,
};

/// Shared application state
///
/// Handlers receive everything they need through this context; the
/// matcher itself stays stateless.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn EventCatalog>,
    pub storage: DeviceStorage,
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Inner state that can be modified
#[derive(Default)]
pub struct AppStateInner {
    pub reservations: ReservationBook,
}

impl AppState {
    pub fn new(catalog: Arc<dyn EventCatalog>, storage: DeviceStorage) -> Self {
        Self {
            catalog,
            storage,
            inner: Arc::new(RwLock::new(AppStateInner::default())),
        }
    }

    /// Bundled mock catalog with in-memory storage
    pub fn with_defaults() -> AppResult<Self> {
        Ok(Self::new(
            Arc::new(MockCatalog::bundled()?),
            DeviceStorage::in_memory(),
        ))
    }
}
