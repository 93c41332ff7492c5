//! Body-shape inference from raw measurement ratios.
//!
//! Rules are evaluated in a fixed precedence; the first match wins.

use crate::sizing::models::{Gender, MeasurementSet};

/// Which rule set to evaluate. `WithShoulders` adds the shoulder/waist ratio
/// to the womens "spoon" rule and the mens "triangle" rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRules {
    Basic,
    WithShoulders,
}

const HOURGLASS_MAX_CHEST_HIP_GAP: f64 = 3.0;
const NARROW_WAIST_HIP_RATIO: f64 = 0.75;
const WIDE_WAIST_HIP_RATIO: f64 = 0.85;
const BROAD_SHOULDER_WAIST_RATIO: f64 = 1.1;
const TRIANGLE_CHEST_WAIST_RATIO: f64 = 1.25;
const OVAL_CHEST_WAIST_RATIO: f64 = 1.05;
const PROMINENT_MATERNITY_WAIST: f64 = 80.0;

/// Present and non-zero; zero is treated like a missing value.
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// `num / den`, or 0 when either side is absent or zero.
fn ratio(num: Option<f64>, den: Option<f64>) -> f64 {
    match (usable(num), usable(den)) {
        (Some(n), Some(d)) => n / d,
        _ => 0.0,
    }
}

/// Infers a body-shape label, or `None` when the required measurements are missing.
/// Maternity always yields a label.
pub fn infer_body_shape(
    gender: Gender,
    m: &MeasurementSet,
    rules: ShapeRules,
) -> Option<&'static str> {
    match gender {
        Gender::Womens => infer_womens(m, rules),
        Gender::Mens => infer_mens(m, rules),
        Gender::Maternity => Some(infer_maternity(m)),
    }
}

fn infer_womens(m: &MeasurementSet, rules: ShapeRules) -> Option<&'static str> {
    let chest = usable(m.chest)?;
    let waist = usable(m.waist)?;
    let hips = usable(m.hips)?;

    let waist_hip = waist / hips;

    if (chest - hips).abs() <= HOURGLASS_MAX_CHEST_HIP_GAP && waist_hip < NARROW_WAIST_HIP_RATIO {
        return Some("hourglass");
    }
    if hips > chest && waist_hip < NARROW_WAIST_HIP_RATIO {
        return Some("pear");
    }
    if waist > hips {
        return Some("apple");
    }
    if chest > hips && waist_hip > WIDE_WAIST_HIP_RATIO {
        return Some("inverted_triangle");
    }
    if rules == ShapeRules::WithShoulders
        && ratio(m.shoulders, m.waist) > BROAD_SHOULDER_WAIST_RATIO
        && chest > hips
    {
        return Some("spoon");
    }
    Some("rectangle")
}

fn infer_mens(m: &MeasurementSet, rules: ShapeRules) -> Option<&'static str> {
    let chest = usable(m.chest)?;
    let waist = usable(m.waist)?;

    let chest_waist = chest / waist;
    let broad_shoulders = match rules {
        ShapeRules::Basic => true,
        ShapeRules::WithShoulders => ratio(m.shoulders, m.waist) > BROAD_SHOULDER_WAIST_RATIO,
    };

    if chest_waist > TRIANGLE_CHEST_WAIST_RATIO && broad_shoulders {
        Some("triangle")
    } else if chest_waist < OVAL_CHEST_WAIST_RATIO {
        Some("oval")
    } else {
        Some("rectangle")
    }
}

fn infer_maternity(m: &MeasurementSet) -> &'static str {
    match (usable(m.waist), usable(m.hips)) {
        (Some(waist), Some(_)) if waist > PROMINENT_MATERNITY_WAIST => "prominent",
        _ => "soft",
    }
}
