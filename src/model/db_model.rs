use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;

/// A mapped location offering an accessibility feature.
///
/// `id` and `created_at` are assigned by Postgres at insert time and never
/// change afterwards.
#[derive(Clone, Debug, FromRow, PartialEq)]
pub struct AccessibilityPointDb {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Free-text category: ramp, elevator, accessible_entrance, ...
    pub point_type: String,
    pub description: Option<String>,
    pub building_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, FromRow, PartialEq)]
pub struct BusStopDb {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// External stop identifier, unique across all stops. Distinct from `id`.
    pub stop_code: String,
    pub accessible: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, FromRow, PartialEq)]
pub struct BusRouteDb {
    pub id: i32,
    pub route_number: String,
    pub route_name: String,
    /// Display color for the route on the map.
    pub color: String,
    pub created_at: DateTime<Utc>,
}
