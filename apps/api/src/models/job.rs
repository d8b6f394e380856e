use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "FULL_TIME",
            EmploymentType::PartTime => "PART_TIME",
            EmploymentType::Contract => "CONTRACT",
            EmploymentType::Internship => "INTERNSHIP",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FULL_TIME" => Some(EmploymentType::FullTime),
            "PART_TIME" => Some(EmploymentType::PartTime),
            "CONTRACT" => Some(EmploymentType::Contract),
            "INTERNSHIP" => Some(EmploymentType::Internship),
            _ => None,
        }
    }
}

/// Posted salary band, in won.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default)]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub salary: Salary,
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub visa_sponsorship: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub business_number: Option<String>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/v1/jobs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: String,
    pub company_name: String,
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub salary: Salary,
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub visa_sponsorship: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub business_number: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub tags: Vec<String>,
    pub salary_min: f64,
    pub salary_max: f64,
    pub employment_type: String,
    pub visa_sponsorship: bool,
    pub description: Option<String>,
    pub contact_phone: Option<String>,
    pub business_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for JobPosting {
    type Error = anyhow::Error;

    fn try_from(row: JobRow) -> Result<Self> {
        let employment_type = EmploymentType::from_code(&row.employment_type).ok_or_else(|| {
            anyhow!(
                "job {} has unknown employment type '{}'",
                row.id,
                row.employment_type
            )
        })?;
        Ok(JobPosting {
            id: row.id,
            title: row.title,
            company_name: row.company_name,
            location: row.location,
            tags: row.tags,
            salary: Salary {
                min: row.salary_min,
                max: row.salary_max,
            },
            employment_type,
            visa_sponsorship: row.visa_sponsorship,
            description: row.description,
            contact_phone: row.contact_phone,
            business_number: row.business_number,
            created_at: row.created_at,
        })
    }
}
