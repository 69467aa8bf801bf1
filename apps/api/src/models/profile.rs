use serde::{Deserialize, Serialize};

use crate::models::job::JobType;
use crate::models::null_as_default;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemotePreference {
    Remote,
    Onsite,
    Hybrid,
    Flexible,
}

/// Projection of a candidate's profile used for matching. Owned by the user
/// service; this crate only reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_type_preferences: Vec<JobType>,
    /// Unset means no stated preference; it earns no work-mode points.
    #[serde(default)]
    pub remote_preference: Option<RemotePreference>,
    #[serde(default)]
    pub city: Option<String>,
    /// Count of prior experience entries, derived by the caller.
    #[serde(default, deserialize_with = "null_as_default")]
    pub years_of_relevant_experience: u32,
}
