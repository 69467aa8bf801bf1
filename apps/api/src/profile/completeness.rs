use serde::{Deserialize, Serialize};

use crate::matching::normalize::{comparison_key, skill_key_set};
use crate::models::profile::CandidateProfile;

const MIN_SKILLS_FOR_COMPLETE: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Skills,
    JobTypePreferences,
    RemotePreference,
    City,
    Experience,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Complete,
    Partial,
    Missing,
}

impl SectionStatus {
    fn score(self) -> f64 {
        match self {
            SectionStatus::Complete => 1.0,
            SectionStatus::Partial => 0.5,
            SectionStatus::Missing => 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionHealth {
    pub section: Section,
    pub weight: f64,
    pub status: SectionStatus,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileCompletenessReport {
    pub overall_score: f64,
    pub sections: Vec<SectionHealth>,
    pub missing_sections: Vec<Section>,
}

/// Sections mirror the match dimensions they feed.
const SECTION_WEIGHTS: &[(Section, f64)] = &[
    (Section::Skills, 0.40),
    (Section::JobTypePreferences, 0.20),
    (Section::RemotePreference, 0.15),
    (Section::City, 0.10),
    (Section::Experience, 0.15),
];

pub fn compute_profile_completeness(profile: &CandidateProfile) -> ProfileCompletenessReport {
    let mut sections = Vec::new();
    let mut weighted_score_sum = 0.0;
    let mut missing_sections = Vec::new();

    for &(section, weight) in SECTION_WEIGHTS {
        let (status, recommendation) = assess_section(section, profile);

        if status == SectionStatus::Missing {
            missing_sections.push(section);
        }
        weighted_score_sum += status.score() * weight;

        sections.push(SectionHealth {
            section,
            weight,
            status,
            recommendation,
        });
    }

    let total_weight: f64 = SECTION_WEIGHTS.iter().map(|(_, w)| w).sum();
    let overall_score = if total_weight > 0.0 {
        (weighted_score_sum / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    };

    ProfileCompletenessReport {
        overall_score,
        sections,
        missing_sections,
    }
}

fn assess_section(section: Section, profile: &CandidateProfile) -> (SectionStatus, Option<String>) {
    match section {
        Section::Skills => {
            let distinct = skill_key_set(&profile.skills).len();
            if distinct == 0 {
                (
                    SectionStatus::Missing,
                    Some("Add your skills so jobs can be matched against them".to_string()),
                )
            } else if distinct < MIN_SKILLS_FOR_COMPLETE {
                (
                    SectionStatus::Partial,
                    Some(format!(
                        "List at least {MIN_SKILLS_FOR_COMPLETE} skills ({distinct} so far)"
                    )),
                )
            } else {
                (SectionStatus::Complete, None)
            }
        }
        Section::JobTypePreferences => {
            if profile.job_type_preferences.is_empty() {
                (
                    SectionStatus::Missing,
                    Some("Choose the job types you are open to".to_string()),
                )
            } else {
                (SectionStatus::Complete, None)
            }
        }
        Section::RemotePreference => {
            if profile.remote_preference.is_none() {
                (
                    SectionStatus::Missing,
                    Some("Set a work mode preference, or choose flexible".to_string()),
                )
            } else {
                (SectionStatus::Complete, None)
            }
        }
        Section::City => {
            if profile.city.as_deref().and_then(comparison_key).is_none() {
                (
                    SectionStatus::Missing,
                    Some("Add your city to match local jobs".to_string()),
                )
            } else {
                (SectionStatus::Complete, None)
            }
        }
        Section::Experience => {
            if profile.years_of_relevant_experience == 0 {
                (
                    SectionStatus::Partial,
                    Some("Add prior experience entries to qualify for non-entry roles".to_string()),
                )
            } else {
                (SectionStatus::Complete, None)
            }
        }
    }
}
