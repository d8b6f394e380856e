#![allow(dead_code)]

use serde::Serialize;

use crate::matching::scorer::{HeuristicMatchScorer, MatchScorer};
use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;

pub const DEFAULT_LIMIT: usize = 5;

/// Upper bound on `limit` accepted from callers and configuration.
pub const MAX_RECOMMENDATIONS: usize = 50;

/// Jobs must score strictly above this to be recommended.
pub const MIN_RECOMMENDATION_SCORE: f64 = 20.0;

#[derive(Debug, Clone, Serialize)]
pub struct ScoredJob<'a> {
    pub job: &'a JobPosting,
    /// `None` when no profile was given and nothing was scored.
    pub score: Option<f64>,
}

/// Recommends up to `limit` jobs for `profile` using the default scorer.
///
/// Without a profile the first `limit` jobs are returned as given, so callers
/// should pass jobs newest first.
pub fn recommend<'a>(
    profile: Option<&CandidateProfile>,
    jobs: &'a [JobPosting],
    limit: usize,
) -> Vec<&'a JobPosting> {
    recommend_scored(&HeuristicMatchScorer::default(), profile, jobs, limit)
        .into_iter()
        .map(|s| s.job)
        .collect()
}

/// Same as [`recommend`], keeping each job's score and taking any scorer.
pub fn recommend_scored<'a>(
    scorer: &dyn MatchScorer,
    profile: Option<&CandidateProfile>,
    jobs: &'a [JobPosting],
    limit: usize,
) -> Vec<ScoredJob<'a>> {
    let Some(profile) = profile else {
        return jobs
            .iter()
            .take(limit)
            .map(|job| ScoredJob { job, score: None })
            .collect();
    };

    let mut scored: Vec<(&JobPosting, f64)> = jobs
        .iter()
        // Visa is a hard requirement here, on top of the scorer's soft penalty.
        .filter(|job| !profile.visa_sponsorship_required || job.visa_sponsorship)
        .map(|job| (job, scorer.score(profile, job).score))
        .filter(|(_, score)| *score > MIN_RECOMMENDATION_SCORE)
        .collect();

    // sort_by is stable: equal scores keep their input order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(limit);

    scored
        .into_iter()
        .map(|(job, score)| ScoredJob {
            job,
            score: Some(score),
        })
        .collect()
}
