use axum::Json;

use crate::models::profile::CandidateProfile;
use crate::profile::completeness::{compute_profile_completeness, ProfileCompletenessReport};

/// POST /api/v1/profile/completeness
pub async fn handle_profile_completeness(
    Json(profile): Json<CandidateProfile>,
) -> Json<ProfileCompletenessReport> {
    Json(compute_profile_completeness(&profile))
}
