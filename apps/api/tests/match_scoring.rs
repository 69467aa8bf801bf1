use jobmatch_api::models::job::{ExperienceLevel, JobPosting, JobType, WorkMode};
use jobmatch_api::models::profile::{CandidateProfile, RemotePreference};
use jobmatch_api::{rank, score};

fn candidate(skills: &[&str], remote: RemotePreference, years: u32) -> CandidateProfile {
    CandidateProfile {
        skills: skills.iter().map(|s| s.to_string()).collect(),
        job_type_preferences: vec![JobType::FullTime, JobType::Internship],
        remote_preference: Some(remote),
        city: Some("Dhaka".to_string()),
        years_of_relevant_experience: years,
    }
}

fn posting(title: &str, skills: &[&str], work_mode: WorkMode, level: ExperienceLevel) -> JobPosting {
    JobPosting {
        id: None,
        title: Some(title.to_string()),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        job_type: JobType::FullTime,
        work_mode,
        city: Some("Dhaka".to_string()),
        experience_level: level,
    }
}

#[test]
fn scores_stay_in_range_across_combinations() {
    let levels = [
        ExperienceLevel::Entry,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
    ];
    let modes = [WorkMode::Remote, WorkMode::Office, WorkMode::Onsite, WorkMode::Hybrid];
    let prefs = [
        RemotePreference::Remote,
        RemotePreference::Onsite,
        RemotePreference::Hybrid,
        RemotePreference::Flexible,
    ];

    for level in levels {
        for mode in modes {
            for pref in prefs {
                for years in [0, 1, 3, 10] {
                    let c = candidate(&["rust", "sql"], pref, years);
                    let j = posting("any", &["Rust", "Kafka", "SQL"], mode, level);
                    let s = score(&c, &j);
                    assert!(s <= 100);
                    assert_eq!(s, score(&c, &j));
                }
            }
        }
    }
}

#[test]
fn senior_candidate_sees_best_fit_first() {
    let c = candidate(&["rust", "postgres", "tokio"], RemotePreference::Hybrid, 4);
    let jobs = vec![
        posting("frontend", &["react", "css"], WorkMode::Office, ExperienceLevel::Entry),
        posting(
            "backend",
            &["rust", "postgres", "tokio"],
            WorkMode::Hybrid,
            ExperienceLevel::Senior,
        ),
        posting("staff", &["rust"], WorkMode::Hybrid, ExperienceLevel::Lead),
    ];

    let ranked = rank(&c, jobs);
    let titles: Vec<_> = ranked
        .iter()
        .map(|r| r.job.title.as_deref().unwrap_or_default())
        .collect();

    // backend 100, staff 40+20+15+10 = 85, frontend 20+10+15 = 45
    assert_eq!(titles, vec!["backend", "staff", "frontend"]);
    assert_eq!(
        ranked.iter().map(|r| r.score).collect::<Vec<_>>(),
        vec![100, 85, 45]
    );
}
