//! Axum route handler for the sizing API.

use axum::{extract::State, Json};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::sizing::coercion::{coerce_measurements, RawMeasurements};
use crate::sizing::engine::{SizeRecommendation, SizingInput};
use crate::sizing::models::Field;
use crate::sizing::profile::ProfileName;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Measurement fields stay as raw JSON so they can be coerced leniently.
#[derive(Debug, Default, Deserialize)]
pub struct SizeRequest {
    pub gender: Option<String>,
    pub chest: Option<Value>,
    pub waist: Option<Value>,
    pub hips: Option<Value>,
    pub inseam: Option<Value>,
    pub shoulders: Option<Value>,
    pub neck: Option<Value>,
    pub thigh: Option<Value>,
    pub calf: Option<Value>,
    pub abdomen_shape: Option<String>,
    pub hip_shape: Option<String>,
    /// Overrides the server's default profile for this request.
    pub profile: Option<String>,
}

impl SizeRequest {
    fn raw_measurements(&self) -> RawMeasurements<'_> {
        [
            (Field::Chest, self.chest.as_ref()),
            (Field::Waist, self.waist.as_ref()),
            (Field::Hips, self.hips.as_ref()),
            (Field::Inseam, self.inseam.as_ref()),
            (Field::Shoulders, self.shoulders.as_ref()),
            (Field::Neck, self.neck.as_ref()),
            (Field::Thigh, self.thigh.as_ref()),
            (Field::Calf, self.calf.as_ref()),
        ]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/size
///
/// Recommends a size from body measurements. The body is read as JSON whatever
/// the declared content type. Malformed measurement values are treated as
/// missing.
pub async fn handle_size(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SizeRecommendation>, AppError> {
    let request: SizeRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::Validation(format!("Request body must be a JSON object: {e}")))?;

    let gender = request
        .gender
        .as_deref()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .ok_or_else(|| AppError::Validation("Gender is required".to_string()))?;

    let profile = request
        .profile
        .as_deref()
        .map(str::parse::<ProfileName>)
        .transpose()?;

    let (measurements, rejected) = coerce_measurements(&request.raw_measurements());
    for (field, reason) in &rejected {
        warn!("Ignoring {} value: {reason}", field.as_str());
    }

    let input = SizingInput {
        gender: gender.to_string(),
        measurements,
        abdomen_shape: request.abdomen_shape.clone(),
        hip_shape: request.hip_shape.clone(),
    };

    let recommendation = state.engine.recommend(&input, profile)?;
    Ok(Json(recommendation))
}
