//! Recommendation pipeline: shape inference → adjustment → matching →
//! diagnostics → result assembly.
//!
//! Every step is a pure function over the profile's static tables, so the
//! engine can be shared freely across requests.

use serde::Serialize;
use tracing::{debug, info};

use crate::sizing::diagnostics::{
    build_guidance, check_health, dominant_measurements, HealthReport,
};
use crate::sizing::models::{Field, Gender, MeasurementSet, RecommendedSize};
use crate::sizing::morphology::{accumulate_adjustments, apply_adjustments, Adjustments};
use crate::sizing::profile::{ProfileName, SizingProfile};
use crate::sizing::shape::infer_body_shape;
use crate::sizing::SizingError;

// ────────────────────────────────────────────────────────────────────────────
// Input / output
// ────────────────────────────────────────────────────────────────────────────

/// Everything the engine needs for one recommendation.
#[derive(Debug, Clone, Default)]
pub struct SizingInput {
    pub gender: String,
    pub measurements: MeasurementSet,
    pub abdomen_shape: Option<String>,
    pub hip_shape: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SizeRecommendation {
    pub recommended_size: RecommendedSize,
    pub profile: ProfileName,
    pub details: RecommendationDetails,
}

/// Every key is always serialized (null when inapplicable) so clients see a
/// stable shape regardless of profile.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationDetails {
    pub gender: Gender,
    pub original_measurements: MeasurementSet,
    pub adjusted_measurements: MeasurementSet,
    pub body_shape: Option<String>,
    pub abdomen_shape: Option<String>,
    pub hip_shape: Option<String>,
    pub morphology_adjustments: Adjustments,
    pub warnings: Vec<String>,
    pub health: HealthReport,
    pub dominant_measurements: Option<Vec<Field>>,
    pub guidance: Option<Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

/// Size recommendation engine bound to a default profile.
#[derive(Debug, Clone, Copy)]
pub struct SizeCharter {
    default_profile: ProfileName,
}

impl SizeCharter {
    pub fn new(default_profile: ProfileName) -> Self {
        Self { default_profile }
    }

    /// Recommends a size using `profile`, or the engine default when `None`.
    pub fn recommend(
        &self,
        input: &SizingInput,
        profile: Option<ProfileName>,
    ) -> Result<SizeRecommendation, SizingError> {
        let profile = profile.unwrap_or(self.default_profile).profile();
        let gender: Gender = input.gender.parse()?;
        Ok(run_profile(profile, gender, input))
    }
}

fn run_profile(profile: &SizingProfile, gender: Gender, input: &SizingInput) -> SizeRecommendation {
    let raw = input.measurements;

    let body_shape = infer_body_shape(gender, &raw, profile.shape_rules);
    let adjustments = accumulate_adjustments(
        gender,
        [
            body_shape,
            input.abdomen_shape.as_deref(),
            input.hip_shape.as_deref(),
        ],
    );
    let adjusted = apply_adjustments(&raw, &adjustments);
    debug!(
        "Profile {} / {gender}: body shape {:?}, adjustments {:?}",
        profile.name, body_shape, adjustments
    );

    let chart = profile.charts.for_gender(gender);
    let matcher = profile.strategy.matcher();
    let recommended_size = matcher.match_size(gender, chart, &adjusted);

    let warnings = profile.consistency.check(&adjusted);
    let health = check_health(&raw, profile.health);

    let (dominant, guidance) = if profile.reports_dominance {
        let dominant = dominant_measurements(&raw);
        let guidance = build_guidance(&dominant, &health, &warnings);
        (Some(dominant), Some(guidance))
    } else {
        (None, None)
    };

    info!(
        "Recommended {} for {gender} (profile: {}, matcher: {})",
        recommended_size.label(),
        profile.name,
        matcher.name()
    );

    SizeRecommendation {
        recommended_size,
        profile: profile.name,
        details: RecommendationDetails {
            gender,
            original_measurements: raw,
            adjusted_measurements: round_adjusted(adjusted),
            body_shape: body_shape.map(str::to_string),
            abdomen_shape: input.abdomen_shape.clone(),
            hip_shape: input.hip_shape.clone(),
            morphology_adjustments: adjustments,
            warnings,
            health,
            dominant_measurements: dominant,
            guidance,
        },
    }
}

/// Rounds adjusted chest/waist/hips to one decimal place for display.
fn round_adjusted(mut adjusted: MeasurementSet) -> MeasurementSet {
    for field in Field::ADJUSTABLE {
        adjusted.set(field, adjusted.get(field).map(round1));
    }
    adjusted
}

/// Half-to-even on the exact binary value. Finite for any finite input.
fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
