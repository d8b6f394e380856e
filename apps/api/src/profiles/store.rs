use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::formatting::format_phone_number;
use crate::models::profile::{SeekerProfileRow, UpsertProfileRequest};

pub async fn get_profile(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<SeekerProfileRow>, AppError> {
    let row: Option<SeekerProfileRow> =
        sqlx::query_as("SELECT * FROM seeker_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    Ok(row)
}

/// Creates or replaces a seeker's profile. Salary bounds are stored in won.
pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    req: &UpsertProfileRequest,
) -> Result<SeekerProfileRow, AppError> {
    let profile = &req.profile;
    let (salary_min, salary_max) = match &profile.salary_range {
        Some(range) => (
            range.min.as_ref().and_then(|b| b.to_won()),
            range.max.as_ref().and_then(|b| b.to_won()),
        ),
        None => (None, None),
    };

    let row: SeekerProfileRow = sqlx::query_as(
        r#"
        INSERT INTO seeker_profiles
            (user_id, skills, desired_positions, preferred_locations, salary_min, salary_max,
             work_type, visa_sponsorship_required, phone, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW())
        ON CONFLICT (user_id) DO UPDATE SET
            skills = EXCLUDED.skills,
            desired_positions = EXCLUDED.desired_positions,
            preferred_locations = EXCLUDED.preferred_locations,
            salary_min = EXCLUDED.salary_min,
            salary_max = EXCLUDED.salary_max,
            work_type = EXCLUDED.work_type,
            visa_sponsorship_required = EXCLUDED.visa_sponsorship_required,
            phone = EXCLUDED.phone,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&profile.skills)
    .bind(&profile.desired_positions)
    .bind(&profile.preferred_locations)
    .bind(salary_min)
    .bind(salary_max)
    .bind(profile.work_type.as_deref().map(str::trim))
    .bind(profile.visa_sponsorship_required)
    .bind(req.phone.as_deref().map(format_phone_number))
    .fetch_one(pool)
    .await?;

    info!("Saved profile for user {user_id}");
    Ok(row)
}
