use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::null_as_default;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Internship,
    Freelance,
    Contract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkMode {
    Remote,
    Office,
    Onsite,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Entry,
    Intermediate,
    Senior,
    Lead,
}

/// Projection of an open job posting used for matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    /// Carried for the caller; never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Display only; never scored or validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    pub job_type: JobType,
    pub work_mode: WorkMode,
    #[serde(default)]
    pub city: Option<String>,
    pub experience_level: ExperienceLevel,
}
