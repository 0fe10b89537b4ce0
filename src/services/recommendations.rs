use crate::{
    error::AppResult,
    models::{PreferenceProfile, ScoredEvent},
    services::{catalog::EventCatalog, matcher},
};

/// Generates personalized event recommendations
///
/// Loads the current catalog and ranks it against the questionnaire
/// profile. Recomputed on every call, nothing is cached.
pub async fn recommend(
    catalog: &dyn EventCatalog,
    profile: &PreferenceProfile,
) -> AppResult<Vec<ScoredEvent>> {
    let events = catalog.fetch_events().await?;
    let ranked = matcher::rank(&events, profile);

    tracing::info!(
        catalog = catalog.name(),
        catalog_size = events.len(),
        recommended = ranked.len(),
        "Recommendations computed"
    );

    Ok(ranked)
}
