use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::store::list_jobs;
use crate::matching::recommend::{recommend_scored, ScoredJob, MAX_RECOMMENDATIONS};
use crate::matching::scorer::MatchReport;
use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;
use crate::profiles::store::get_profile;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub profile: CandidateProfile,
    pub job: JobPosting,
}

#[derive(Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub profile: Option<CandidateProfile>,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct RecommendationQuery {
    pub user_id: Option<Uuid>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendedJob {
    pub job: JobPosting,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl From<ScoredJob<'_>> for RecommendedJob {
    fn from(scored: ScoredJob<'_>) -> Self {
        RecommendedJob {
            job: scored.job.clone(),
            score: scored.score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    /// False when no profile was available and the newest jobs were returned as-is.
    pub personalized: bool,
    pub recommendations: Vec<RecommendedJob>,
}

fn resolve_limit(requested: Option<usize>, default: usize) -> Result<usize, AppError> {
    let limit = requested.unwrap_or(default);
    if limit > MAX_RECOMMENDATIONS {
        return Err(AppError::Validation(format!(
            "limit must not exceed {MAX_RECOMMENDATIONS}"
        )));
    }
    Ok(limit)
}

fn build_response(
    state: &AppState,
    profile: Option<&CandidateProfile>,
    jobs: &[JobPosting],
    limit: usize,
) -> RecommendationResponse {
    let picks = recommend_scored(state.scorer.as_ref(), profile, jobs, limit);
    debug!(
        "Recommended {} of {} jobs (personalized: {})",
        picks.len(),
        jobs.len(),
        profile.is_some()
    );
    RecommendationResponse {
        personalized: profile.is_some(),
        recommendations: picks.into_iter().map(RecommendedJob::from).collect(),
    }
}

/// POST /api/v1/match/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Json<MatchReport> {
    Json(state.scorer.score(&req.profile, &req.job))
}

/// POST /api/v1/match/recommend
/// Stateless: ranks the jobs supplied in the body.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let limit = resolve_limit(req.limit, state.config.recommendation_limit)?;
    Ok(Json(build_response(
        &state,
        req.profile.as_ref(),
        &req.jobs,
        limit,
    )))
}

/// GET /api/v1/recommendations
/// Ranks the newest stored jobs for a stored seeker profile.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationQuery>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let limit = resolve_limit(params.limit, state.config.recommendation_limit)?;

    let profile = match params.user_id {
        Some(user_id) => get_profile(&state.db, user_id)
            .await?
            .map(CandidateProfile::from),
        None => None,
    };
    let jobs = list_jobs(&state.db, state.config.recommendation_pool_size).await?;

    Ok(Json(build_response(&state, profile.as_ref(), &jobs, limit)))
}
