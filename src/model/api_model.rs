use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::db_model::{AccessibilityPointDb, BusRouteDb, BusStopDb};

/// Output shape of an accessibility point: every stored field, including the
/// server-assigned `id` and `created_at`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AccessibilityPoint {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub point_type: String,
    pub description: Option<String>,
    pub building_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Client-settable subset for creating an accessibility point. `id` and
/// `created_at` are server-assigned and deliberately absent.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AccessibilityPointCreate {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub point_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub building_name: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct BusStop {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub stop_code: String,
    pub accessible: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BusStopCreate {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub stop_code: String,
    /// Defaults to true when the client leaves it out.
    #[serde(default = "default_accessible")]
    pub accessible: bool,
}

pub(crate) fn default_accessible() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct BusRoute {
    pub id: i32,
    pub route_number: String,
    pub route_name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BusRouteCreate {
    pub route_number: String,
    pub route_name: String,
    pub color: String,
}

/// Read-side bus stop view carrying a timetable instead of a stop code.
///
/// This is a separate DTO on purpose: it is not backed by a column set of its
/// own and must never be conflated with [`BusStop`]. `schedule` maps a label
/// (day of week or direction) to an ordered list of time strings.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct BusStopTimetable {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub accessible: bool,
    pub schedule: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BusStopTimetableCreate {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_accessible")]
    pub accessible: bool,
    pub schedule: BTreeMap<String, Vec<String>>,
}

impl From<AccessibilityPointDb> for AccessibilityPoint {
    fn from(value: AccessibilityPointDb) -> Self {
        AccessibilityPoint {
            id: value.id,
            name: value.name,
            latitude: value.latitude,
            longitude: value.longitude,
            point_type: value.point_type,
            description: value.description,
            building_name: value.building_name,
            created_at: value.created_at,
        }
    }
}

impl From<BusStopDb> for BusStop {
    fn from(value: BusStopDb) -> Self {
        BusStop {
            id: value.id,
            name: value.name,
            latitude: value.latitude,
            longitude: value.longitude,
            stop_code: value.stop_code,
            accessible: value.accessible,
            created_at: value.created_at,
        }
    }
}

impl From<BusRouteDb> for BusRoute {
    fn from(value: BusRouteDb) -> Self {
        BusRoute {
            id: value.id,
            route_number: value.route_number,
            route_name: value.route_name,
            color: value.color,
            created_at: value.created_at,
        }
    }
}
