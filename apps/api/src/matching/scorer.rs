//! Match Scorer: weighted compatibility score between a candidate profile and a job posting.
//!
//! Five independent contributions are summed, rounded half up and clamped to 0–100:
//!
//! | Dimension   | Default points | Awarded when                                              |
//! |-------------|----------------|-----------------------------------------------------------|
//! | skills      | 40             | proportional to required skills the candidate holds       |
//! | job type    | 20             | job type is one of the candidate's preferences            |
//! | work mode   | 15             | remote/remote, hybrid/hybrid, or candidate is flexible    |
//! | location    | 10             | both cities present and equal ignoring case               |
//! | experience  | 15             | candidate years meet the level floor (`lead` never does)  |
//!
//! `AppState` holds an `Arc<dyn MatchScorer>` built from the configured weights.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::normalize::{cities_match, dedup_skills, round_half_up, skill_key_set};
use crate::matching::weights::MatchWeights;
use crate::models::job::{JobPosting, WorkMode};
use crate::models::profile::{CandidateProfile, RemotePreference};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Per-dimension points behind a score. Points are unrounded; `score` is the
/// final rounded and clamped total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub score: u8,
    pub skills: f64,
    pub job_type: f64,
    pub work_mode: f64,
    pub location: f64,
    pub experience: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores one candidate against one job. Implementations must be total and
/// pure: no I/O, no shared mutable state, same output for the same input.
pub trait MatchScorer: Send + Sync {
    fn breakdown(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchBreakdown;

    fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> u8 {
        self.breakdown(candidate, job).score
    }

    /// Label reported to API callers.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatchScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct WeightedMatchScorer {
    weights: MatchWeights,
}

impl WeightedMatchScorer {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }
}

impl MatchScorer for WeightedMatchScorer {
    fn breakdown(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchBreakdown {
        let breakdown = compute_breakdown(&self.weights, candidate, job);
        debug!(
            "Scored job {:?}: {} (skills={:.2} type={} mode={} location={} experience={})",
            job.id,
            breakdown.score,
            breakdown.skills,
            breakdown.job_type,
            breakdown.work_mode,
            breakdown.location,
            breakdown.experience
        );
        breakdown
    }

    fn backend(&self) -> &'static str {
        "weighted"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

fn compute_breakdown(
    weights: &MatchWeights,
    candidate: &CandidateProfile,
    job: &JobPosting,
) -> MatchBreakdown {
    let required = dedup_skills(&job.required_skills);
    let held = skill_key_set(&candidate.skills);

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();
    for (key, spelling) in &required {
        if held.contains(key) {
            matched_skills.push(spelling.to_string());
        } else {
            missing_skills.push(spelling.to_string());
        }
    }

    // No requirement is not a match signal.
    let skills = if required.is_empty() || held.is_empty() {
        0.0
    } else {
        weights.skills * matched_skills.len() as f64 / required.len() as f64
    };

    let job_type = if candidate.job_type_preferences.contains(&job.job_type) {
        weights.job_type
    } else {
        0.0
    };

    let work_mode = if work_mode_matches(candidate.remote_preference, job.work_mode) {
        weights.work_mode
    } else {
        0.0
    };

    let location = if cities_match(candidate.city.as_deref(), job.city.as_deref()) {
        weights.location
    } else {
        0.0
    };

    let experience = match weights.min_years(job.experience_level) {
        Some(floor) if candidate.years_of_relevant_experience >= floor => weights.experience,
        _ => 0.0,
    };

    let total = skills + job_type + work_mode + location + experience;

    MatchBreakdown {
        score: to_score(total),
        skills,
        job_type,
        work_mode,
        location,
        experience,
        matched_skills,
        missing_skills,
    }
}

/// Only remote/remote and hybrid/hybrid are matches, plus `Flexible` against
/// anything. Onsite preference and an unset preference never match.
fn work_mode_matches(preference: Option<RemotePreference>, mode: WorkMode) -> bool {
    matches!(
        (preference, mode),
        (Some(RemotePreference::Flexible), _)
            | (Some(RemotePreference::Remote), WorkMode::Remote)
            | (Some(RemotePreference::Hybrid), WorkMode::Hybrid)
    )
}

fn to_score(total: f64) -> u8 {
    if !total.is_finite() {
        return 0;
    }
    round_half_up(total.max(0.0)).clamp(0.0, 100.0) as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
