//! Health, consistency and dominance diagnostics attached to every recommendation.

use serde::Serialize;

use crate::sizing::models::{Field, MeasurementSet, Range};

pub const ALL_TYPICAL_MESSAGE: &str = "All measurements within typical range.";
pub const DOUBLE_CHECK_MESSAGE: &str =
    "Please double-check measurements or consider consulting sizing charts.";

/// A measurement counts as dominant at or above this share of the largest one.
const DOMINANT_SHARE: f64 = 0.9;

// ────────────────────────────────────────────────────────────────────────────
// Health
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub messages: Vec<String>,
}

/// Plausibility bounds applied to raw measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthPolicy {
    /// One range, 30–180 cm, for every field.
    Global,
    /// A realistic human range per field.
    PerField,
}

impl HealthPolicy {
    pub fn sane_range(&self, field: Field) -> Range {
        match self {
            HealthPolicy::Global => Range::new(30.0, 180.0),
            HealthPolicy::PerField => match field {
                Field::Chest => Range::new(40.0, 180.0),
                Field::Waist => Range::new(40.0, 150.0),
                Field::Hips => Range::new(40.0, 170.0),
                Field::Inseam => Range::new(30.0, 120.0),
                Field::Shoulders => Range::new(30.0, 70.0),
                Field::Neck => Range::new(25.0, 50.0),
                Field::Thigh => Range::new(30.0, 80.0),
                Field::Calf => Range::new(20.0, 60.0),
            },
        }
    }
}

/// Flags every present raw measurement outside its sane range. Falls back to a
/// single informational message when nothing is flagged.
pub fn check_health(raw: &MeasurementSet, policy: HealthPolicy) -> HealthReport {
    let mut messages: Vec<String> = raw
        .present()
        .filter_map(|(field, value)| {
            let range = policy.sane_range(field);
            (!range.contains(value)).then(|| {
                format!(
                    "{} measurement ({} cm) is outside typical range ({}-{} cm).",
                    field.display_name(),
                    value,
                    range.low,
                    range.high
                )
            })
        })
        .collect();

    let status = if messages.is_empty() {
        messages.push(ALL_TYPICAL_MESSAGE.to_string());
        HealthStatus::Healthy
    } else {
        HealthStatus::Warning
    };

    HealthReport { status, messages }
}

// ────────────────────────────────────────────────────────────────────────────
// Consistency
// ────────────────────────────────────────────────────────────────────────────

/// Thresholds for flagging unusual chest/waist/hips proportions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyPolicy {
    /// chest outside 0.7–1.3 × waist; waist outside 0.7–1.3 × hips.
    Ratio,
    /// chest < 0.85 × waist; waist > 1.1 × hips; chest and hips more than 20 cm apart.
    Proportion,
}

impl ConsistencyPolicy {
    /// Evaluated on adjusted measurements. Pairs with a missing side are skipped.
    pub fn check(&self, adjusted: &MeasurementSet) -> Vec<String> {
        match self {
            ConsistencyPolicy::Ratio => ratio_warnings(adjusted),
            ConsistencyPolicy::Proportion => proportion_warnings(adjusted),
        }
    }
}

fn ratio_warnings(m: &MeasurementSet) -> Vec<String> {
    let mut warnings = Vec::new();

    if let (Some(chest), Some(waist)) = (m.chest, m.waist) {
        if chest < 0.7 * waist {
            warnings.push(
                "Chest measurement is significantly smaller than waist; consider fit options."
                    .to_string(),
            );
        } else if chest > 1.3 * waist {
            warnings.push(
                "Chest measurement is significantly larger than waist; consider fit options."
                    .to_string(),
            );
        }
    }

    if let (Some(waist), Some(hips)) = (m.waist, m.hips) {
        if waist > 1.3 * hips {
            warnings.push(
                "Waist measurement is significantly larger than hips; consider fit options."
                    .to_string(),
            );
        } else if waist < 0.7 * hips {
            warnings.push(
                "Waist measurement is significantly smaller than hips; consider fit options."
                    .to_string(),
            );
        }
    }

    warnings
}

fn proportion_warnings(m: &MeasurementSet) -> Vec<String> {
    let mut warnings = Vec::new();

    if let (Some(chest), Some(waist)) = (m.chest, m.waist) {
        if chest < waist * 0.85 {
            warnings.push(
                "Chest measurement is significantly smaller than waist. Check input or consider a looser fit."
                    .to_string(),
            );
        }
    }
    if let (Some(waist), Some(hips)) = (m.waist, m.hips) {
        if waist > hips * 1.1 {
            warnings.push(
                "Waist measurement is unusually larger than hips. Verify measurements.".to_string(),
            );
        }
    }
    if let (Some(chest), Some(hips)) = (m.chest, m.hips) {
        if (chest - hips).abs() > 20.0 {
            warnings
                .push("Chest and hips measurements differ greatly, which is uncommon.".to_string());
        }
    }

    warnings
}

// ────────────────────────────────────────────────────────────────────────────
// Dominance & guidance
// ────────────────────────────────────────────────────────────────────────────

const DOMINANCE_FIELDS: [Field; 7] = [
    Field::Chest,
    Field::Waist,
    Field::Hips,
    Field::Shoulders,
    Field::Neck,
    Field::Thigh,
    Field::Calf,
];

/// Fields whose raw value is positive and within 90% of the largest one.
/// Absent fields count as 0. Inseam is not considered.
pub fn dominant_measurements(raw: &MeasurementSet) -> Vec<Field> {
    let value = |field: Field| raw.get(field).unwrap_or(0.0);
    let max = DOMINANCE_FIELDS
        .iter()
        .map(|f| value(*f))
        .fold(0.0_f64, f64::max);

    DOMINANCE_FIELDS
        .into_iter()
        .filter(|f| {
            let v = value(*f);
            v > 0.0 && v >= DOMINANT_SHARE * max
        })
        .collect()
}

/// Free-text hints shown alongside the recommendation.
pub fn build_guidance(
    dominant: &[Field],
    health: &HealthReport,
    warnings: &[String],
) -> Vec<String> {
    let mut guidance = Vec::new();

    if !dominant.is_empty() {
        let names: Vec<&str> = dominant.iter().map(|f| f.as_str()).collect();
        guidance.push(format!(
            "Dominant measurements affecting size: {}.",
            names.join(", ")
        ));
    }
    if health.status == HealthStatus::Warning || !warnings.is_empty() {
        guidance.push(DOUBLE_CHECK_MESSAGE.to_string());
    }

    guidance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary(chest: f64, waist: f64, hips: f64) -> MeasurementSet {
        MeasurementSet::default()
            .with(Field::Chest, chest)
            .with(Field::Waist, waist)
            .with(Field::Hips, hips)
    }

    #[test]
    fn test_global_health_flags_low_chest() {
        let m = MeasurementSet::default().with(Field::Chest, 25.0);
        let report = check_health(&m, HealthPolicy::Global);
        assert_eq!(report.status, HealthStatus::Warning);
        assert_eq!(report.messages.len(), 1);
        assert!(report.messages[0].contains("Chest"));
        assert!(report.messages[0].contains("25"));
    }

    #[test]
    fn test_health_bounds_inclusive() {
        let m = MeasurementSet::default()
            .with(Field::Chest, 30.0)
            .with(Field::Waist, 180.0);
        let report = check_health(&m, HealthPolicy::Global);
        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.messages, vec![ALL_TYPICAL_MESSAGE.to_string()]);
    }

    #[test]
    fn test_per_field_health_uses_field_ranges() {
        // Neck 55 passes the global range but not the per-field one.
        let m = MeasurementSet::default().with(Field::Neck, 55.0);
        assert_eq!(check_health(&m, HealthPolicy::Global).status, HealthStatus::Healthy);

        let report = check_health(&m, HealthPolicy::PerField);
        assert_eq!(report.status, HealthStatus::Warning);
        assert_eq!(
            report.messages[0],
            "Neck measurement (55 cm) is outside typical range (25-50 cm)."
        );
    }

    #[test]
    fn test_per_field_allows_small_calf() {
        let m = MeasurementSet::default().with(Field::Calf, 25.0);
        assert_eq!(check_health(&m, HealthPolicy::PerField).status, HealthStatus::Healthy);
        assert_eq!(check_health(&m, HealthPolicy::Global).status, HealthStatus::Warning);
    }

    #[test]
    fn test_empty_measurements_are_healthy() {
        let report = check_health(&MeasurementSet::default(), HealthPolicy::PerField);
        assert_eq!(report.status, HealthStatus::Healthy);
    }

    #[test]
    fn test_ratio_policy_chest_larger_than_waist() {
        let w = ConsistencyPolicy::Ratio.check(&primary(100.0, 70.0, 95.0));
        assert_eq!(w.len(), 1);
        assert!(w[0].contains("significantly larger than waist"));
    }

    #[test]
    fn test_ratio_policy_waist_smaller_than_hips() {
        // 60 < 0.7 * 90 = 63
        let w = ConsistencyPolicy::Ratio.check(&primary(70.0, 60.0, 90.0));
        assert_eq!(w.len(), 1);
        assert!(w[0].contains("Waist measurement is significantly smaller than hips"));
    }

    #[test]
    fn test_ratio_policy_quiet_for_typical_body() {
        assert!(ConsistencyPolicy::Ratio.check(&primary(92.0, 74.0, 100.0)).is_empty());
    }

    #[test]
    fn test_proportion_policy_thresholds() {
        // 80 < 0.85 * 100; 100 > 1.1 * 85; |80 - 85| = 5
        let w = ConsistencyPolicy::Proportion.check(&primary(80.0, 100.0, 85.0));
        assert_eq!(w.len(), 2);

        // |90 - 115| = 25
        let w = ConsistencyPolicy::Proportion.check(&primary(90.0, 75.0, 115.0));
        assert_eq!(
            w,
            vec!["Chest and hips measurements differ greatly, which is uncommon.".to_string()]
        );
    }

    fn pair(a: (Field, f64), b: (Field, f64)) -> MeasurementSet {
        MeasurementSet::default().with(a.0, a.1).with(b.0, b.1)
    }

    #[test]
    fn test_ratio_policy_boundaries_do_not_warn() {
        let policy = ConsistencyPolicy::Ratio;
        // 0.7 * 100 and 1.3 * 100 land exactly on 70 and 130
        assert!(policy.check(&pair((Field::Chest, 70.0), (Field::Waist, 100.0))).is_empty());
        assert!(policy.check(&pair((Field::Chest, 130.0), (Field::Waist, 100.0))).is_empty());
        assert!(policy.check(&pair((Field::Waist, 70.0), (Field::Hips, 100.0))).is_empty());
        assert!(policy.check(&pair((Field::Waist, 130.0), (Field::Hips, 100.0))).is_empty());

        assert_eq!(policy.check(&pair((Field::Chest, 69.9), (Field::Waist, 100.0))).len(), 1);
        assert_eq!(policy.check(&pair((Field::Chest, 130.1), (Field::Waist, 100.0))).len(), 1);
        assert_eq!(policy.check(&pair((Field::Waist, 69.9), (Field::Hips, 100.0))).len(), 1);
        assert_eq!(policy.check(&pair((Field::Waist, 130.1), (Field::Hips, 100.0))).len(), 1);
    }

    #[test]
    fn test_proportion_policy_boundaries_do_not_warn() {
        let policy = ConsistencyPolicy::Proportion;
        // 100 * 0.85 = 85 and 80 * 1.1 = 88 exactly
        assert!(policy.check(&pair((Field::Chest, 85.0), (Field::Waist, 100.0))).is_empty());
        assert!(policy.check(&pair((Field::Waist, 88.0), (Field::Hips, 80.0))).is_empty());
        assert!(policy.check(&pair((Field::Chest, 100.0), (Field::Hips, 80.0))).is_empty());
        assert!(policy.check(&pair((Field::Chest, 80.0), (Field::Hips, 100.0))).is_empty());

        assert_eq!(policy.check(&pair((Field::Chest, 84.9), (Field::Waist, 100.0))).len(), 1);
        assert_eq!(policy.check(&pair((Field::Waist, 88.1), (Field::Hips, 80.0))).len(), 1);
        assert_eq!(policy.check(&pair((Field::Chest, 100.1), (Field::Hips, 80.0))).len(), 1);
    }

    #[test]
    fn test_consistency_skips_missing_pairs() {
        let m = MeasurementSet::default().with(Field::Chest, 200.0);
        assert!(ConsistencyPolicy::Ratio.check(&m).is_empty());
        assert!(ConsistencyPolicy::Proportion.check(&m).is_empty());
    }

    #[test]
    fn test_dominant_within_ninety_percent() {
        // max 94; 0.9 * 94 = 84.6 → chest 85 and hips 94
        let m = primary(85.0, 68.0, 94.0).with(Field::Shoulders, 40.0);
        assert_eq!(dominant_measurements(&m), vec![Field::Chest, Field::Hips]);
    }

    #[test]
    fn test_dominant_ignores_inseam_and_empty_input() {
        assert!(dominant_measurements(&MeasurementSet::default()).is_empty());
        let m = MeasurementSet::default()
            .with(Field::Inseam, 90.0)
            .with(Field::Waist, 70.0);
        assert_eq!(dominant_measurements(&m), vec![Field::Waist]);
    }

    #[test]
    fn test_guidance_lists_dominant_fields() {
        let health = check_health(&MeasurementSet::default(), HealthPolicy::PerField);
        let guidance = build_guidance(&[Field::Chest, Field::Hips], &health, &[]);
        assert_eq!(
            guidance,
            vec!["Dominant measurements affecting size: chest, hips.".to_string()]
        );
    }

    #[test]
    fn test_guidance_asks_to_double_check_on_warnings() {
        let health = check_health(&MeasurementSet::default(), HealthPolicy::PerField);
        let guidance = build_guidance(&[], &health, &["odd".to_string()]);
        assert_eq!(guidance, vec![DOUBLE_CHECK_MESSAGE.to_string()]);
    }
}
