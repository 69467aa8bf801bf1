// Match Scorer: candidate-to-job compatibility scoring and recommendation ranking.
// Pure computation. Persistence of apply-time scores lives in `applications`.

pub mod handlers;
pub mod normalize;
pub mod ranking;
pub mod scorer;
pub mod weights;

use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;

use self::ranking::{rank_jobs, RankedJob};
use self::scorer::{MatchScorer, WeightedMatchScorer};

/// Scores one job with the default weights.
pub fn score(candidate: &CandidateProfile, job: &JobPosting) -> u8 {
    WeightedMatchScorer::default().score(candidate, job)
}

/// Ranks jobs with the default weights. Equal scores keep input order.
pub fn rank(candidate: &CandidateProfile, jobs: Vec<JobPosting>) -> Vec<RankedJob> {
    rank_jobs(&WeightedMatchScorer::default(), candidate, jobs)
}
