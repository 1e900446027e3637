//! Data layer for a location-based accessibility and transit lookup service.
//!
//! Owns the durable (Postgres) and API (JSON) shapes of accessibility
//! points, bus stops, and bus routes, plus the validation of untyped create
//! payloads and the insert/read queries that map between the two shapes.
//! Transport and query logic live elsewhere.

pub mod dal;
pub mod error;
pub mod model;
pub mod validation;

pub use error::{DataError, FieldError, Result, ValidationError};
