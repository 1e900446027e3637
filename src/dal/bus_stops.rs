use sqlx::{query_as, Pool, Postgres};

use crate::error::{DataError, Result};
use crate::model::api_model::BusStopCreate;
use crate::model::db_model::BusStopDb;

/// Inserts one bus stop. A duplicate `stop_code` trips the unique constraint
/// and surfaces as [`DataError::UniquenessViolation`].
#[tracing::instrument(err, skip(pool))]
pub async fn insert_bus_stop(stop: &BusStopCreate, pool: &Pool<Postgres>) -> Result<BusStopDb> {
    let row = query_as::<_, BusStopDb>(
        "INSERT INTO bus_stops (name, latitude, longitude, stop_code, accessible)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, latitude, longitude, stop_code, accessible, created_at",
    )
    .bind(&stop.name)
    .bind(stop.latitude)
    .bind(stop.longitude)
    .bind(&stop.stop_code)
    .bind(stop.accessible)
    .fetch_one(pool)
    .await
    .map_err(DataError::from_insert_error)?;

    Ok(row)
}

#[tracing::instrument(err, skip(pool))]
pub async fn get_bus_stops(pool: &Pool<Postgres>) -> Result<Vec<BusStopDb>> {
    let rows = query_as::<_, BusStopDb>(
        "SELECT id, name, latitude, longitude, stop_code, accessible, created_at
        FROM bus_stops
        ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

#[tracing::instrument(err, skip(pool))]
pub async fn get_bus_stop(id: i32, pool: &Pool<Postgres>) -> Result<Option<BusStopDb>> {
    let row = query_as::<_, BusStopDb>(
        "SELECT id, name, latitude, longitude, stop_code, accessible, created_at
        FROM bus_stops
        WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

#[tracing::instrument(err, skip(pool))]
pub async fn get_bus_stop_by_code(
    stop_code: &str,
    pool: &Pool<Postgres>,
) -> Result<Option<BusStopDb>> {
    let row = query_as::<_, BusStopDb>(
        "SELECT id, name, latitude, longitude, stop_code, accessible, created_at
        FROM bus_stops
        WHERE stop_code = $1",
    )
    .bind(stop_code)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
