#![allow(dead_code)]

//! Match Scoring — heuristic compatibility between a seeker profile and a job posting.
//!
//! Five weighted features are scored independently. The sum is normalized by the
//! weights of the evaluated features only: a blank profile section drops out of
//! both numerator and denominator.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`; `HeuristicMatchScorer` is the default.

use serde::{Deserialize, Serialize};

use crate::matching::weights::{employment_type_for_label, MatchWeights};
use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Skills,
    Location,
    Salary,
    Title,
    EmploymentType,
}

/// One evaluated feature. Features that were not evaluated are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScore {
    pub feature: Feature,
    pub weight: f64,
    pub contribution: f64, // 0.0 – weight
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Nominally 0 – 100. Not clamped.
    pub score: f64,
    /// Sum of contributions, after the visa penalty.
    pub raw_score: f64,
    /// Sum of weights of evaluated features.
    pub max_score: f64,
    pub visa_penalty_applied: bool,
    pub features: Vec<FeatureScore>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores one profile against one posting. Implementations must be pure.
pub trait MatchScorer: Send + Sync {
    fn score(&self, profile: &CandidateProfile, job: &JobPosting) -> MatchReport;
}

#[derive(Debug, Clone, Default)]
pub struct HeuristicMatchScorer {
    pub weights: MatchWeights,
}

impl MatchScorer for HeuristicMatchScorer {
    fn score(&self, profile: &CandidateProfile, job: &JobPosting) -> MatchReport {
        compute_match(profile, job, &self.weights)
    }
}

/// Match score with the default weights.
pub fn score(profile: &CandidateProfile, job: &JobPosting) -> f64 {
    score_breakdown(profile, job).score
}

/// Full per-feature report with the default weights.
pub fn score_breakdown(profile: &CandidateProfile, job: &JobPosting) -> MatchReport {
    compute_match(profile, job, &MatchWeights::default())
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

fn compute_match(
    profile: &CandidateProfile,
    job: &JobPosting,
    weights: &MatchWeights,
) -> MatchReport {
    let features: Vec<FeatureScore> = [
        skills_feature(profile, job, weights.skills),
        location_feature(profile, job, weights.location),
        salary_feature(profile, job, weights.salary),
        title_feature(profile, job, weights.title),
        employment_type_feature(profile, job, weights.employment_type),
    ]
    .into_iter()
    .flatten()
    .collect();

    let max_score: f64 = features.iter().map(|f| f.weight).sum();
    let mut raw_score: f64 = features.iter().map(|f| f.contribution).sum();

    // Applied before normalization, so it scales the final score directly.
    let visa_penalty_applied = profile.visa_sponsorship_required && !job.visa_sponsorship;
    if visa_penalty_applied {
        raw_score *= weights.visa_penalty;
    }

    let score = if max_score > 0.0 {
        raw_score / max_score * 100.0
    } else {
        0.0
    };

    MatchReport {
        score,
        raw_score,
        max_score,
        visa_penalty_applied,
        features,
    }
}

/// Loose, either-direction substring match. Both sides must already be lowercased.
/// "react" matches "react native", and "java" matches "javascript".
fn loosely_matches(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

fn binary(feature: Feature, weight: f64, matched: bool) -> FeatureScore {
    FeatureScore {
        feature,
        weight,
        contribution: if matched { weight } else { 0.0 },
        matched,
    }
}

fn skills_feature(
    profile: &CandidateProfile,
    job: &JobPosting,
    weight: f64,
) -> Option<FeatureScore> {
    if profile.skills.is_empty() || job.tags.is_empty() {
        return None;
    }

    let tags: Vec<String> = job.tags.iter().map(|t| t.to_lowercase()).collect();
    let hits = profile
        .skills
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|skill| tags.iter().any(|tag| loosely_matches(skill, tag)))
        .count();

    Some(FeatureScore {
        feature: Feature::Skills,
        weight,
        contribution: hits as f64 / profile.skills.len() as f64 * weight,
        matched: hits > 0,
    })
}

fn location_feature(
    profile: &CandidateProfile,
    job: &JobPosting,
    weight: f64,
) -> Option<FeatureScore> {
    if profile.preferred_locations.is_empty() {
        return None;
    }

    // "서울 강남구" → "서울"
    let region = job.location.split(' ').next().unwrap_or_default();
    let matched = profile
        .preferred_locations
        .iter()
        .any(|pref| job.location.contains(pref.as_str()) || pref.contains(region));

    Some(binary(Feature::Location, weight, matched))
}

fn salary_feature(
    profile: &CandidateProfile,
    job: &JobPosting,
    weight: f64,
) -> Option<FeatureScore> {
    let (profile_min, profile_max) = profile.salary_range.as_ref()?.bounds()?;

    let overlap_min = profile_min.max(job.salary.min);
    let overlap_max = profile_max.min(job.salary.max);
    let profile_width = profile_max - profile_min;

    let ratio = if overlap_min > overlap_max {
        0.0
    } else if profile_width > 0.0 {
        ((overlap_max - overlap_min) / profile_width).min(1.0)
    } else {
        // Zero-width profile range with a non-empty overlap: the single
        // desired figure sits inside the posted band.
        1.0
    };

    Some(FeatureScore {
        feature: Feature::Salary,
        weight,
        contribution: ratio * weight,
        matched: ratio > 0.0,
    })
}

fn title_feature(
    profile: &CandidateProfile,
    job: &JobPosting,
    weight: f64,
) -> Option<FeatureScore> {
    if profile.desired_positions.is_empty() {
        return None;
    }

    let title = job.title.to_lowercase();
    let matched = profile
        .desired_positions
        .iter()
        .any(|p| loosely_matches(&p.to_lowercase(), &title));

    Some(binary(Feature::Title, weight, matched))
}

fn employment_type_feature(
    profile: &CandidateProfile,
    job: &JobPosting,
    weight: f64,
) -> Option<FeatureScore> {
    let wanted = profile
        .work_type
        .as_deref()
        .and_then(employment_type_for_label)?;

    Some(binary(
        Feature::EmploymentType,
        weight,
        wanted == job.employment_type,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
