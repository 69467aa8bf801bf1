use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::scorer::MatchScorer;
use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;

/// A job posting carried alongside its match score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJob {
    pub job: JobPosting,
    pub score: u8,
}

/// Scores every job independently and orders them by descending score.
///
/// Ordering guarantee: jobs with equal scores keep their relative input order.
/// This relies on `slice::sort_by_key` being a stable sort.
pub fn rank_jobs(
    scorer: &dyn MatchScorer,
    candidate: &CandidateProfile,
    jobs: Vec<JobPosting>,
) -> Vec<RankedJob> {
    let mut ranked: Vec<RankedJob> = jobs
        .into_iter()
        .map(|job| {
            let score = scorer.score(candidate, &job);
            RankedJob { job, score }
        })
        .collect();

    ranked.sort_by_key(|r| Reverse(r.score));

    debug!(
        "Ranked {} jobs (top score: {:?})",
        ranked.len(),
        ranked.first().map(|r| r.score)
    );
    ranked
}
