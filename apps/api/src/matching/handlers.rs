//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::ranking::{rank_jobs, RankedJob};
use crate::matching::scorer::MatchBreakdown;
use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;
use crate::state::AppState;

const MAX_RANK_LIMIT: usize = 500;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub candidate: CandidateProfile,
    pub job: JobPosting,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: u8,
    pub breakdown: MatchBreakdown,
    pub scorer_backend: String,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub candidate: CandidateProfile,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub ranked: Vec<RankedJob>,
    /// Number of jobs ranked, before `limit` truncation.
    pub total: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/score
///
/// Scores one job against a candidate profile and returns the per-dimension breakdown.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let breakdown = state
        .match_scorer
        .breakdown(&request.candidate, &request.job);

    Ok(Json(ScoreResponse {
        score: breakdown.score,
        breakdown,
        scorer_backend: state.match_scorer.backend().to_string(),
    }))
}

/// POST /api/v1/match/rank
///
/// Ranks a candidate's open jobs by descending score. Equal scores keep input order.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    if let Some(limit) = request.limit {
        validate_limit(limit)?;
    }

    let mut ranked = rank_jobs(state.match_scorer.as_ref(), &request.candidate, request.jobs);
    let total = ranked.len();
    if let Some(limit) = request.limit {
        ranked.truncate(limit);
    }

    Ok(Json(RankResponse { ranked, total }))
}

fn validate_limit(limit: usize) -> Result<(), AppError> {
    if !(1..=MAX_RANK_LIMIT).contains(&limit) {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_RANK_LIMIT}"
        )));
    }
    Ok(())
}
