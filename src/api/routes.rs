use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route("/events", get(handlers::list_events))
        .route("/events/search", get(handlers::search_events))
        .route("/events/:id", get(handlers::get_event))
        // Onboarding
        .route(
            "/questionnaire",
            get(handlers::get_questionnaire)
                .post(handlers::submit_questionnaire)
                .delete(handlers::reset_questionnaire),
        )
        .route("/questionnaire/skip", post(handlers::skip_questionnaire))
        .route("/profile", get(handlers::get_profile))
        // Recommendations
        .route(
            "/recommendations",
            get(handlers::get_recommendations).post(handlers::recommend_for_profile),
        )
        // Reservations
        .route(
            "/reservations",
            get(handlers::list_reservations).post(handlers::create_reservation),
        )
        .route("/reservations/:id", get(handlers::get_reservation))
        .route("/reservations/:id/cancel", post(handlers::cancel_reservation))
        // Favorites
        .route("/favorites", get(handlers::list_favorites))
        .route("/favorites/:event_id", post(handlers::toggle_favorite))
}
