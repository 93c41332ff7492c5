use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::sizing::SizingError;

// ────────────────────────────────────────────────────────────────────────────
// Gender / department
// ────────────────────────────────────────────────────────────────────────────

/// Department selecting which size chart and morphology table apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Womens,
    Mens,
    Maternity,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Womens => "womens",
            Gender::Mens => "mens",
            Gender::Maternity => "maternity",
        }
    }
}

impl FromStr for Gender {
    type Err = SizingError;

    /// Case-insensitive: "Womens" and "WOMENS" both resolve to `Gender::Womens`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "womens" => Ok(Gender::Womens),
            "mens" => Ok(Gender::Mens),
            "maternity" => Ok(Gender::Maternity),
            _ => Err(SizingError::InvalidGender(s.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sizes
// ────────────────────────────────────────────────────────────────────────────

/// Garment size label. Ordering within a gender comes from the chart, not
/// from this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeLabel {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
}

impl SizeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeLabel::XS => "XS",
            SizeLabel::S => "S",
            SizeLabel::M => "M",
            SizeLabel::L => "L",
            SizeLabel::XL => "XL",
            SizeLabel::XXL => "XXL",
        }
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const NO_MATCH_LABEL: &str = "No exact match found";

/// Outcome of size matching. `NoMatch` is a sentinel, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendedSize {
    Size(SizeLabel),
    NoMatch,
}

impl RecommendedSize {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendedSize::Size(size) => size.as_str(),
            RecommendedSize::NoMatch => NO_MATCH_LABEL,
        }
    }
}

impl Serialize for RecommendedSize {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Measurements
// ────────────────────────────────────────────────────────────────────────────

/// A named body measurement. Declaration order is the canonical field order
/// used for iteration and for JSON map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Chest,
    Waist,
    Hips,
    Inseam,
    Shoulders,
    Neck,
    Thigh,
    Calf,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Chest,
        Field::Waist,
        Field::Hips,
        Field::Inseam,
        Field::Shoulders,
        Field::Neck,
        Field::Thigh,
        Field::Calf,
    ];

    /// Fields that morphology adjustments apply to.
    pub const ADJUSTABLE: [Field; 3] = [Field::Chest, Field::Waist, Field::Hips];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Chest => "chest",
            Field::Waist => "waist",
            Field::Hips => "hips",
            Field::Inseam => "inseam",
            Field::Shoulders => "shoulders",
            Field::Neck => "neck",
            Field::Thigh => "thigh",
            Field::Calf => "calf",
        }
    }

    /// Capitalized name used in user-facing messages ("Chest").
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::Chest => "Chest",
            Field::Waist => "Waist",
            Field::Hips => "Hips",
            Field::Inseam => "Inseam",
            Field::Shoulders => "Shoulders",
            Field::Neck => "Neck",
            Field::Thigh => "Thigh",
            Field::Calf => "Calf",
        }
    }
}

/// Body measurements in centimeters. `None` means the caller did not provide
/// the field (or provided something unusable).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MeasurementSet {
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub inseam: Option<f64>,
    pub shoulders: Option<f64>,
    pub neck: Option<f64>,
    pub thigh: Option<f64>,
    pub calf: Option<f64>,
}

impl MeasurementSet {
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Chest => self.chest,
            Field::Waist => self.waist,
            Field::Hips => self.hips,
            Field::Inseam => self.inseam,
            Field::Shoulders => self.shoulders,
            Field::Neck => self.neck,
            Field::Thigh => self.thigh,
            Field::Calf => self.calf,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::Chest => &mut self.chest,
            Field::Waist => &mut self.waist,
            Field::Hips => &mut self.hips,
            Field::Inseam => &mut self.inseam,
            Field::Shoulders => &mut self.shoulders,
            Field::Neck => &mut self.neck,
            Field::Thigh => &mut self.thigh,
            Field::Calf => &mut self.calf,
        };
        *slot = value;
    }

    /// Builder-style setter for fixtures.
    #[cfg(test)]
    pub fn with(mut self, field: Field, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }

    /// Present fields in canonical order.
    pub fn present(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|v| (field, v)))
    }
}

/// Closed interval `[low, high]` in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

impl Range {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive at both ends.
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    /// Squared distance to the nearest edge; 0 inside the range.
    pub fn squared_distance(&self, value: f64) -> f64 {
        if value < self.low {
            (self.low - value).powi(2)
        } else if value > self.high {
            (value - self.high).powi(2)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse_is_case_insensitive() {
        assert_eq!("Womens".parse::<Gender>().unwrap(), Gender::Womens);
        assert_eq!("MENS".parse::<Gender>().unwrap(), Gender::Mens);
        assert_eq!("maternity".parse::<Gender>().unwrap(), Gender::Maternity);
    }

    #[test]
    fn test_unknown_gender_is_error() {
        let err = "kids".parse::<Gender>().unwrap_err();
        assert!(matches!(err, SizingError::InvalidGender(ref g) if g == "kids"));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let r = Range::new(90.0, 95.0);
        assert!(r.contains(90.0));
        assert!(r.contains(95.0));
        assert!(!r.contains(89.9));
        assert!(!r.contains(95.1));
    }

    #[test]
    fn test_squared_distance() {
        let r = Range::new(90.0, 95.0);
        assert_eq!(r.squared_distance(92.0), 0.0);
        assert_eq!(r.squared_distance(87.0), 9.0);
        assert_eq!(r.squared_distance(97.0), 4.0);
    }

    #[test]
    fn test_no_match_serializes_as_sentinel_text() {
        let json = serde_json::to_string(&RecommendedSize::NoMatch).unwrap();
        assert_eq!(json, "\"No exact match found\"");
        let json = serde_json::to_string(&RecommendedSize::Size(SizeLabel::XXL)).unwrap();
        assert_eq!(json, "\"XXL\"");
    }

    #[test]
    fn test_present_iterates_in_field_order() {
        let m = MeasurementSet::default()
            .with(Field::Calf, 36.0)
            .with(Field::Chest, 85.0);
        let fields: Vec<Field> = m.present().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Chest, Field::Calf]);
    }
}
