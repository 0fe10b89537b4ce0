use std::collections::BTreeSet;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{
        Event, OnboardingStatus, PreferenceProfile, Question, Reservation, ScoredEvent,
        SearchParams, SearchResults,
    },
    services::{questionnaire, recommendations, search},
};

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponse {
    pub questions: Vec<Question>,
    pub show_questionnaire: bool,
    pub status: OnboardingStatus,
}

#[derive(Debug, Serialize)]
pub struct SubmitQuestionnaireResponse {
    pub profile: PreferenceProfile,
    pub recommendations: Vec<ScoredEvent>,
}

fn default_ticket_type() -> String {
    "Standard".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub event_id: String,
    pub ticket_count: u32,
    #[serde(default = "default_ticket_type")]
    pub ticket_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesResponse {
    pub event_ids: BTreeSet<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteToggleResponse {
    pub event_id: String,
    pub is_favorite: bool,
}

async fn require_event(state: &AppState, id: &str) -> AppResult<Event> {
    state
        .catalog
        .find_event(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("event {}", id)))
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Full event catalog
pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    Ok(Json(state.catalog.fetch_events().await?))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Event>> {
    Ok(Json(require_event(&state, &id).await?))
}

/// Catalog search with filters, sorting and pagination
pub async fn search_events(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResults>> {
    let events = state.catalog.fetch_events().await?;
    let results = search::search(&events, &params)?;

    tracing::debug!(
        query = ?params.q,
        total = results.total,
        "Catalog search"
    );

    Ok(Json(results))
}

/// Questions plus the onboarding state restored from storage
pub async fn get_questionnaire(
    State(state): State<AppState>,
) -> AppResult<Json<QuestionnaireResponse>> {
    let status = state.storage.load_onboarding().await?;

    Ok(Json(QuestionnaireResponse {
        questions: questionnaire::questions(),
        show_questionnaire: status.should_show_questionnaire(),
        status,
    }))
}

/// Stores a completed questionnaire and returns fresh recommendations
pub async fn submit_questionnaire(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(profile): Json<PreferenceProfile>,
) -> AppResult<Json<SubmitQuestionnaireResponse>> {
    tracing::info!(
        request_id = %request_id,
        interests = profile.interests.len(),
        locations = profile.preferred_locations.len(),
        budget = profile.budget.as_str(),
        "Processing questionnaire submission"
    );

    questionnaire::validate_submission(&profile)?;
    state.storage.complete_questionnaire(&profile).await?;

    let recommendations = recommendations::recommend(state.catalog.as_ref(), &profile).await?;

    Ok(Json(SubmitQuestionnaireResponse {
        profile,
        recommendations,
    }))
}

pub async fn skip_questionnaire(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.storage.skip_questionnaire().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Forgets the stored answers so the questionnaire is shown again
pub async fn reset_questionnaire(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.storage.reset_questionnaire().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_profile(State(state): State<AppState>) -> AppResult<Json<PreferenceProfile>> {
    state
        .storage
        .load_profile()
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("no questionnaire answers stored".to_string()))
}

/// Recommendations for the stored profile, empty until one is submitted
pub async fn get_recommendations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ScoredEvent>>> {
    let Some(profile) = state.storage.load_profile().await? else {
        return Ok(Json(Vec::new()));
    };

    Ok(Json(
        recommendations::recommend(state.catalog.as_ref(), &profile).await?,
    ))
}

/// Recommendations for an ad-hoc profile, nothing is stored
pub async fn recommend_for_profile(
    State(state): State<AppState>,
    Json(profile): Json<PreferenceProfile>,
) -> AppResult<Json<Vec<ScoredEvent>>> {
    Ok(Json(
        recommendations::recommend(state.catalog.as_ref(), &profile).await?,
    ))
}

pub async fn list_reservations(State(state): State<AppState>) -> Json<Vec<Reservation>> {
    let inner = state.inner.read().await;
    Json(inner.reservations.list().to_vec())
}

pub async fn create_reservation(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    tracing::info!(
        request_id = %request_id,
        event_id = %request.event_id,
        ticket_count = request.ticket_count,
        "Processing reservation request"
    );

    let event = require_event(&state, &request.event_id).await?;

    let mut inner = state.inner.write().await;
    let reservation =
        inner
            .reservations
            .make_reservation(&event, request.ticket_count, &request.ticket_type)?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Reservation>> {
    let inner = state.inner.read().await;
    inner
        .reservations
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("reservation {}", id)))
}

pub async fn cancel_reservation(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Reservation>> {
    tracing::info!(request_id = %request_id, reservation_id = %id, "Cancelling reservation");

    let mut inner = state.inner.write().await;
    Ok(Json(inner.reservations.cancel(id)?))
}

pub async fn list_favorites(State(state): State<AppState>) -> AppResult<Json<FavoritesResponse>> {
    Ok(Json(FavoritesResponse {
        event_ids: state.storage.favorites().await?,
    }))
}

/// Adds the event to the favorites, or removes it if already there
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> AppResult<Json<FavoriteToggleResponse>> {
    require_event(&state, &event_id).await?;
    let is_favorite = state.storage.toggle_favorite(&event_id).await?;

    Ok(Json(FavoriteToggleResponse {
        event_id,
        is_favorite,
    }))
}
