use sqlx::{query_as, Pool, Postgres};

use crate::error::{DataError, Result};
use crate::model::api_model::AccessibilityPointCreate;
use crate::model::db_model::AccessibilityPointDb;

/// Inserts one accessibility point. Postgres assigns `id` and `created_at`;
/// the full row is returned so callers can serialize it straight back out.
#[tracing::instrument(err, skip(pool))]
pub async fn insert_accessibility_point(
    point: &AccessibilityPointCreate,
    pool: &Pool<Postgres>,
) -> Result<AccessibilityPointDb> {
    let row = query_as::<_, AccessibilityPointDb>(
        "INSERT INTO accessibility_points
            (name, latitude, longitude, point_type, description, building_name)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, latitude, longitude, point_type, description, building_name, created_at",
    )
    .bind(&point.name)
    .bind(point.latitude)
    .bind(point.longitude)
    .bind(&point.point_type)
    .bind(&point.description)
    .bind(&point.building_name)
    .fetch_one(pool)
    .await
    .map_err(DataError::from_insert_error)?;

    Ok(row)
}

#[tracing::instrument(err, skip(pool))]
pub async fn get_accessibility_points(
    pool: &Pool<Postgres>,
) -> Result<Vec<AccessibilityPointDb>> {
    let rows = query_as::<_, AccessibilityPointDb>(
        "SELECT id, name, latitude, longitude, point_type, description, building_name, created_at
        FROM accessibility_points
        ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

#[tracing::instrument(err, skip(pool))]
pub async fn get_accessibility_point(
    id: i32,
    pool: &Pool<Postgres>,
) -> Result<Option<AccessibilityPointDb>> {
    let row = query_as::<_, AccessibilityPointDb>(
        "SELECT id, name, latitude, longitude, point_type, description, building_name, created_at
        FROM accessibility_points
        WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
