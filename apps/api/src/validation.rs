//! Form validation for job postings and seeker profiles, run before anything is persisted.

use serde::{Deserialize, Serialize};

use crate::formatting::{is_complete_business_number, is_complete_phone_number};
use crate::matching::weights::{employment_type_for_label, WORK_TYPE_LABELS};
use crate::models::job::CreateJobRequest;
use crate::models::profile::UpsertProfileRequest;

pub const MAX_JOB_TAGS: usize = 20;
pub const MAX_PROFILE_SKILLS: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub passed: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            passed: errors.is_empty(),
            errors,
        }
    }
}

fn field_error(field: &str, message: impl Into<String>) -> FieldError {
    FieldError {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validates a new job posting.
pub fn validate_job(req: &CreateJobRequest) -> ValidationResult {
    let mut errors = Vec::new();

    for (field, value) in [
        ("title", &req.title),
        ("companyName", &req.company_name),
        ("location", &req.location),
    ] {
        if value.trim().is_empty() {
            errors.push(field_error(field, "is required"));
        }
    }

    if !req.salary.min.is_finite() || !req.salary.max.is_finite() {
        errors.push(field_error("salary", "must be a number"));
    } else {
        if req.salary.min < 0.0 {
            errors.push(field_error("salary.min", "must not be negative"));
        }
        if req.salary.max < req.salary.min {
            errors.push(field_error("salary.max", "must be at least salary.min"));
        }
    }

    if req.tags.len() > MAX_JOB_TAGS {
        errors.push(field_error(
            "tags",
            format!("at most {MAX_JOB_TAGS} tags are allowed"),
        ));
    }
    if req.tags.iter().any(|t| t.trim().is_empty()) {
        errors.push(field_error("tags", "tags must not be blank"));
    }

    if let Some(phone) = &req.contact_phone {
        if !is_complete_phone_number(phone) {
            errors.push(field_error("contactPhone", "is not a valid phone number"));
        }
    }
    if let Some(number) = &req.business_number {
        if !is_complete_business_number(number) {
            errors.push(field_error("businessNumber", "must have 10 digits"));
        }
    }

    ValidationResult::from_errors(errors)
}

/// Validates a seeker profile submission.
pub fn validate_profile(req: &UpsertProfileRequest) -> ValidationResult {
    let profile = &req.profile;
    let mut errors = Vec::new();

    if profile.skills.len() > MAX_PROFILE_SKILLS {
        errors.push(field_error(
            "skills",
            format!("at most {MAX_PROFILE_SKILLS} skills are allowed"),
        ));
    }

    if let Some(range) = &profile.salary_range {
        let min = range.min.as_ref().map(|b| b.to_won());
        let max = range.max.as_ref().map(|b| b.to_won());
        if matches!(min, Some(None)) {
            errors.push(field_error("salaryRange.min", "is not a number"));
        }
        if matches!(max, Some(None)) {
            errors.push(field_error("salaryRange.max", "is not a number"));
        }
        if let (Some(Some(min)), Some(Some(max))) = (min, max) {
            if min > max {
                errors.push(field_error(
                    "salaryRange.max",
                    "must be at least salaryRange.min",
                ));
            }
        }
    }

    if let Some(work_type) = &profile.work_type {
        if employment_type_for_label(work_type).is_none() {
            let known: Vec<&str> = WORK_TYPE_LABELS.iter().map(|(label, _)| *label).collect();
            errors.push(field_error(
                "workType",
                format!("must be one of: {}", known.join(", ")),
            ));
        }
    }

    if let Some(phone) = &req.phone {
        if !is_complete_phone_number(phone) {
            errors.push(field_error("phone", "is not a valid phone number"));
        }
    }

    ValidationResult::from_errors(errors)
}
