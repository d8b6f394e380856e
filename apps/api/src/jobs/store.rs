use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::formatting::{format_business_number, format_phone_number};
use crate::models::job::{CreateJobRequest, JobPosting, JobRow};

/// Lists up to `limit` postings, newest first.
pub async fn list_jobs(pool: &PgPool, limit: i64) -> Result<Vec<JobPosting>, AppError> {
    let rows: Vec<JobRow> =
        sqlx::query_as("SELECT * FROM job_postings ORDER BY created_at DESC, id LIMIT $1")
            .bind(limit)
            .fetch_all(pool)
            .await?;

    rows.into_iter()
        .map(|row| JobPosting::try_from(row).map_err(AppError::from))
        .collect()
}

pub async fn get_job(pool: &PgPool, id: Uuid) -> Result<Option<JobPosting>, AppError> {
    let row: Option<JobRow> = sqlx::query_as("SELECT * FROM job_postings WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(JobPosting::try_from).transpose()?)
}

/// Inserts an already-validated posting. Phone and business numbers are stored formatted.
pub async fn insert_job(pool: &PgPool, req: &CreateJobRequest) -> Result<JobPosting, AppError> {
    let tags: Vec<String> = req.tags.iter().map(|t| t.trim().to_string()).collect();

    let row: JobRow = sqlx::query_as(
        r#"
        INSERT INTO job_postings
            (id, title, company_name, location, tags, salary_min, salary_max,
             employment_type, visa_sponsorship, description, contact_phone, business_number)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.title.trim())
    .bind(req.company_name.trim())
    .bind(req.location.trim())
    .bind(&tags)
    .bind(req.salary.min)
    .bind(req.salary.max)
    .bind(req.employment_type.as_str())
    .bind(req.visa_sponsorship)
    .bind(req.description.as_deref())
    .bind(req.contact_phone.as_deref().map(format_phone_number))
    .bind(req.business_number.as_deref().map(format_business_number))
    .fetch_one(pool)
    .await?;

    info!("Created job posting {} ({})", row.id, row.title);
    Ok(JobPosting::try_from(row)?)
}
