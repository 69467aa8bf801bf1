use serde::Deserialize;
use uuid::Uuid;

use crate::applications::store::{ApplicationStore, NewApplication};
use crate::errors::AppError;
use crate::matching::scorer::MatchScorer;
use crate::models::application::ApplicationRow;
use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub candidate: CandidateProfile,
    pub job: JobPosting,
    pub cover_letter: Option<String>,
}

/// Scores the candidate against the job once and records the application with
/// that score. A repeat application for the same job is a `Conflict`.
pub async fn submit_application(
    store: &dyn ApplicationStore,
    scorer: &dyn MatchScorer,
    request: ApplyRequest,
) -> Result<ApplicationRow, AppError> {
    if let Some(job_id) = request.job.id {
        if job_id != request.job_id {
            return Err(AppError::Validation(format!(
                "job.id {job_id} does not match job_id {}",
                request.job_id
            )));
        }
    }

    let match_score = scorer.score(&request.candidate, &request.job);

    store
        .insert(NewApplication {
            candidate_id: request.candidate_id,
            job_id: request.job_id,
            match_score,
            cover_letter: request.cover_letter,
        })
        .await?
        .ok_or_else(|| {
            AppError::Conflict(format!(
                "Candidate {} has already applied to job {}",
                request.candidate_id, request.job_id
            ))
        })
}
