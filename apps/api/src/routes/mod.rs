pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::matching::handlers as matching;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match/score", post(matching::handle_score))
        .route("/api/v1/match/rank", post(matching::handle_rank))
        // Applications API
        .route(
            "/api/v1/applications",
            post(applications::handle_apply).get(applications::handle_list_applications),
        )
        .route(
            "/api/v1/applications/:id",
            get(applications::handle_get_application),
        )
        // Profile API
        .route(
            "/api/v1/profile/completeness",
            post(profile::handle_profile_completeness),
        )
        .with_state(state)
}
