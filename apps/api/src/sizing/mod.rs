// Size recommendation engine.
// Implements: body-shape inference, morphology adjustment, size matching,
// diagnostics and the HTTP handler that fronts them.
// Everything below `handlers` is synchronous and free of I/O.

pub mod charts;
pub mod coercion;
pub mod diagnostics;
pub mod engine;
pub mod handlers;
pub mod matcher;
pub mod models;
pub mod morphology;
pub mod profile;
pub mod shape;

use thiserror::Error;

/// Engine-level failures. "No size matched" is not an error; see
/// `models::RecommendedSize::NoMatch`.
#[derive(Debug, Error, PartialEq)]
pub enum SizingError {
    #[error("Invalid gender/department '{0}'. Choose from 'womens', 'mens', or 'maternity'.")]
    InvalidGender(String),

    #[error("Unknown sizing profile '{0}'. Choose from 'tuned' or 'mimic'.")]
    UnknownProfile(String),
}
