use serde::{Deserialize, Serialize};

use crate::models::job::EmploymentType;

/// Per-feature weights for the heuristic scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub location: f64,
    pub salary: f64,
    pub title: f64,
    pub employment_type: f64,
    /// Multiplier on the raw score when a seeker needs a visa the job won't sponsor.
    pub visa_penalty: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 40.0,
            location: 25.0,
            salary: 20.0,
            title: 15.0,
            employment_type: 10.0,
            visa_penalty: 0.3,
        }
    }
}

impl MatchWeights {
    pub fn total(&self) -> f64 {
        self.skills + self.location + self.salary + self.title + self.employment_type
    }
}

/// Work-type labels offered on the seeker signup form.
pub const WORK_TYPE_LABELS: &[(&str, EmploymentType)] = &[
    ("정규직", EmploymentType::FullTime),
    ("계약직", EmploymentType::Contract),
    ("인턴", EmploymentType::Internship),
    ("프리랜서", EmploymentType::Contract),
];

pub fn employment_type_for_label(label: &str) -> Option<EmploymentType> {
    let label = label.trim();
    WORK_TYPE_LABELS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, code)| *code)
}
