use itertools::Itertools;
use sqlx::{query_as, Pool, Postgres, QueryBuilder, Transaction};
use tracing::{info_span, Instrument};

use crate::error::{DataError, Result};
use crate::model::api_model::BusRouteCreate;
use crate::model::db_model::BusRouteDb;

#[tracing::instrument(err, skip(pool))]
pub async fn insert_bus_route(route: &BusRouteCreate, pool: &Pool<Postgres>) -> Result<BusRouteDb> {
    let row = query_as::<_, BusRouteDb>(
        "INSERT INTO bus_routes (route_number, route_name, color)
        VALUES ($1, $2, $3)
        RETURNING id, route_number, route_name, color, created_at",
    )
    .bind(&route.route_number)
    .bind(&route.route_name)
    .bind(&route.color)
    .fetch_one(pool)
    .await
    .map_err(DataError::from_insert_error)?;

    Ok(row)
}

/// Bulk seed insert for an imported route list. Postgres bind parameters are
/// capped per statement, hence the chunking.
pub async fn insert_bus_routes(
    routes: &[BusRouteCreate],
    tx: &mut Transaction<'_, Postgres>,
) -> Result<()> {
    let route_chunks = routes.chunks(1024).collect_vec();
    for routes in route_chunks {
        let mut query_builder =
            QueryBuilder::new("INSERT INTO bus_routes (route_number, route_name, color)");

        query_builder.push_values(routes, |mut b, route| {
            b.push_bind(&route.route_number)
                .push_bind(&route.route_name)
                .push_bind(&route.color);
        });

        query_builder
            .build()
            .execute(&mut **tx)
            .instrument(info_span!("Inserting bus routes"))
            .await?;
    }

    Ok(())
}

#[tracing::instrument(err, skip(pool))]
pub async fn get_bus_route(id: i32, pool: &Pool<Postgres>) -> Result<Option<BusRouteDb>> {
    let row = query_as::<_, BusRouteDb>(
        "SELECT id, route_number, route_name, color, created_at
        FROM bus_routes
        WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

#[tracing::instrument(err, skip(pool))]
pub async fn get_bus_routes(pool: &Pool<Postgres>) -> Result<Vec<BusRouteDb>> {
    let rows = query_as::<_, BusRouteDb>(
        "SELECT id, route_number, route_name, color, created_at
        FROM bus_routes
        ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
