use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Seeker forms collect salary in 만원 (10,000 KRW).
pub const MAN_WON: f64 = 10_000.0;

/// A salary bound as submitted by a seeker.
///
/// Numbers are already in won. Strings come straight from the signup form and
/// are denominated in 만원, e.g. `"3,500"` means 35,000,000 won.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SalaryBound {
    Amount(f64),
    ManWon(String),
}

impl SalaryBound {
    /// Converts the bound to won. Unparseable or non-finite input yields `None`.
    pub fn to_won(&self) -> Option<f64> {
        match self {
            SalaryBound::Amount(v) => v.is_finite().then_some(*v),
            SalaryBound::ManWon(raw) => {
                let cleaned: String = raw
                    .chars()
                    .filter(|c| *c != ',' && !c.is_whitespace())
                    .collect();
                cleaned
                    .parse::<f64>()
                    .ok()
                    .map(|v| v * MAN_WON)
                    .filter(|v| v.is_finite())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    #[serde(default)]
    pub min: Option<SalaryBound>,
    #[serde(default)]
    pub max: Option<SalaryBound>,
}

impl SalaryRange {
    /// Both bounds in won, or `None` if either is missing or unreadable.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let min = self.min.as_ref()?.to_won()?;
        let max = self.max.as_ref()?.to_won()?;
        Some((min, max))
    }
}

/// The parts of a job seeker's profile that matching looks at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    pub desired_positions: Vec<String>,
    pub preferred_locations: Vec<String>,
    pub salary_range: Option<SalaryRange>,
    /// Korean employment label, e.g. "정규직".
    pub work_type: Option<String>,
    pub visa_sponsorship_required: bool,
}

/// Body of `PUT /api/v1/profiles/:user_id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProfileRequest {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SeekerProfileRow {
    pub user_id: Uuid,
    pub skills: Vec<String>,
    pub desired_positions: Vec<String>,
    pub preferred_locations: Vec<String>,
    /// Stored in won.
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub work_type: Option<String>,
    pub visa_sponsorship_required: bool,
    pub phone: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<SeekerProfileRow> for CandidateProfile {
    fn from(row: SeekerProfileRow) -> Self {
        let salary_range = match (row.salary_min, row.salary_max) {
            (None, None) => None,
            (min, max) => Some(SalaryRange {
                min: min.map(SalaryBound::Amount),
                max: max.map(SalaryBound::Amount),
            }),
        };
        CandidateProfile {
            skills: row.skills,
            desired_positions: row.desired_positions,
            preferred_locations: row.preferred_locations,
            salary_range,
            work_type: row.work_type,
            visa_sponsorship_required: row.visa_sponsorship_required,
        }
    }
}
