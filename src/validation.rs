//! Checks untyped create payloads against the declared entity shapes.
//!
//! Every offending field is collected and reported in one
//! [`ValidationError`] rather than failing on the first problem. Unknown
//! fields are rejected, and the server-assigned `id` / `created_at` get a
//! dedicated message since clients sending them is a recurring mistake.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{FieldError, ValidationError};
use crate::model::api_model::{
    default_accessible, AccessibilityPointCreate, BusRouteCreate, BusStopCreate,
    BusStopTimetableCreate,
};

/// Fields only the storage layer may assign.
const SERVER_ASSIGNED: [&str; 2] = ["id", "created_at"];

pub fn validate_accessibility_point_create(
    input: &Value,
) -> Result<AccessibilityPointCreate, ValidationError> {
    let mut payload = Payload::new(input)?;

    let name = payload.require_str("name");
    let latitude = payload.require_f64("latitude");
    let longitude = payload.require_f64("longitude");
    let point_type = payload.require_str("type");
    let description = payload.optional_str("description");
    let building_name = payload.optional_str("building_name");

    payload.finish()?;

    Ok(AccessibilityPointCreate {
        name,
        latitude,
        longitude,
        point_type,
        description,
        building_name,
    })
}

pub fn validate_bus_stop_create(input: &Value) -> Result<BusStopCreate, ValidationError> {
    let mut payload = Payload::new(input)?;

    let name = payload.require_str("name");
    let latitude = payload.require_f64("latitude");
    let longitude = payload.require_f64("longitude");
    let stop_code = payload.require_str("stop_code");
    let accessible = payload.bool_or("accessible", default_accessible());

    payload.finish()?;

    Ok(BusStopCreate {
        name,
        latitude,
        longitude,
        stop_code,
        accessible,
    })
}

pub fn validate_bus_route_create(input: &Value) -> Result<BusRouteCreate, ValidationError> {
    let mut payload = Payload::new(input)?;

    let route_number = payload.require_str("route_number");
    let route_name = payload.require_str("route_name");
    let color = payload.require_str("color");

    payload.finish()?;

    Ok(BusRouteCreate {
        route_number,
        route_name,
        color,
    })
}

pub fn validate_bus_stop_timetable_create(
    input: &Value,
) -> Result<BusStopTimetableCreate, ValidationError> {
    let mut payload = Payload::new(input)?;

    let name = payload.require_str("name");
    let latitude = payload.require_f64("latitude");
    let longitude = payload.require_f64("longitude");
    let accessible = payload.bool_or("accessible", default_accessible());
    let schedule = payload.require_schedule("schedule");

    payload.finish()?;

    Ok(BusStopTimetableCreate {
        name,
        latitude,
        longitude,
        accessible,
        schedule,
    })
}

/// One create payload being checked field by field.
///
/// Accessors record an error and hand back a placeholder on failure;
/// [`Payload::finish`] refuses to let a payload with any recorded error
/// through, so placeholders never reach a caller.
struct Payload<'a> {
    object: &'a Map<String, Value>,
    declared: Vec<&'static str>,
    errors: Vec<FieldError>,
}

impl<'a> Payload<'a> {
    fn new(input: &'a Value) -> Result<Self, ValidationError> {
        let object = input.as_object().ok_or_else(|| {
            ValidationError::new(vec![FieldError::new("payload", "expected a JSON object")])
        })?;

        Ok(Payload {
            object,
            declared: Vec::new(),
            errors: Vec::new(),
        })
    }

    /// Null is treated the same as absent throughout.
    fn get(&mut self, name: &'static str) -> Option<&'a Value> {
        self.declared.push(name);
        match self.object.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn require_str(&mut self, name: &'static str) -> String {
        match self.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                self.errors.push(FieldError::new(name, "expected a string"));
                String::new()
            }
            None => {
                self.errors.push(FieldError::new(name, "is required"));
                String::new()
            }
        }
    }

    /// Accepts any JSON number; integers are widened to f64, nothing else
    /// is coerced.
    fn require_f64(&mut self, name: &'static str) -> f64 {
        match self.get(name) {
            Some(value) => match value.as_f64() {
                Some(n) => n,
                None => {
                    self.errors.push(FieldError::new(name, "expected a number"));
                    0.0
                }
            },
            None => {
                self.errors.push(FieldError::new(name, "is required"));
                0.0
            }
        }
    }

    fn optional_str(&mut self, name: &'static str) -> Option<String> {
        match self.get(name) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.errors.push(FieldError::new(name, "expected a string"));
                None
            }
            None => None,
        }
    }

    fn bool_or(&mut self, name: &'static str, default: bool) -> bool {
        match self.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                self.errors
                    .push(FieldError::new(name, "expected a boolean"));
                default
            }
            None => default,
        }
    }

    /// A schedule is a mapping from a label (day of week or direction) to an
    /// ordered list of time strings.
    fn require_schedule(&mut self, name: &'static str) -> BTreeMap<String, Vec<String>> {
        let Some(value) = self.get(name) else {
            self.errors.push(FieldError::new(name, "is required"));
            return BTreeMap::new();
        };

        let Some(entries) = value.as_object() else {
            self.errors
                .push(FieldError::new(name, "expected an object"));
            return BTreeMap::new();
        };

        let mut schedule = BTreeMap::new();
        for (label, times) in entries {
            match parse_time_list(times) {
                Some(times) => {
                    schedule.insert(label.clone(), times);
                }
                None => {
                    self.errors.push(FieldError::new(
                        format!("{name}.{label}"),
                        "expected an array of time strings",
                    ));
                }
            }
        }
        schedule
    }

    fn finish(self) -> Result<(), ValidationError> {
        let mut errors = self.errors;

        for key in self.object.keys() {
            if self.declared.contains(&key.as_str()) {
                continue;
            }
            if SERVER_ASSIGNED.contains(&key.as_str()) {
                errors.push(FieldError::new(
                    key.clone(),
                    "is server-assigned and not accepted on create",
                ));
            } else {
                errors.push(FieldError::new(key.clone(), "unknown field"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}

fn parse_time_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|t| t.as_str().map(str::to_owned))
        .collect()
}
