//! Axum route handlers for the Applications API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::applications::apply::{submit_application, ApplyRequest};
use crate::errors::AppError;
use crate::models::application::ApplicationRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CandidateQuery {
    pub candidate_id: Uuid,
}

/// POST /api/v1/applications
///
/// Scores the candidate against the job once and stores the score with the new application.
pub async fn handle_apply(
    State(state): State<AppState>,
    Json(request): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<ApplicationRow>), AppError> {
    let row = submit_application(
        state.application_store.as_ref(),
        state.match_scorer.as_ref(),
        request,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/applications?candidate_id=
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Query(params): Query<CandidateQuery>,
) -> Result<Json<Vec<ApplicationRow>>, AppError> {
    let rows = state
        .application_store
        .list_for_candidate(params.candidate_id)
        .await?;
    Ok(Json(rows))
}

/// GET /api/v1/applications/:id
pub async fn handle_get_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicationRow>, AppError> {
    let row = state
        .application_store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
    Ok(Json(row))
}
