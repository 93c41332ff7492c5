//! Size matching — pluggable, trait-based strategies that turn adjusted
//! measurements into a recommended size.
//!
//! - `SmallestThenMaxMatcher`: each field picks its smallest fitting size
//!   independently, then the largest of those wins.
//! - `JointRangeMatcher`: the smallest size whose ranges hold every field at
//!   once, falling back to the nearest size by squared edge distance.
//!
//! The two disagree for the same input, so a `SizingProfile` names which one
//! it uses via `MatchStrategy`.


use crate::sizing::charts::{SizeChart, SizeRow};
use crate::sizing::models::{Field, Gender, MeasurementSet, RecommendedSize, SizeLabel};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to add a matching policy without touching the engine.
pub trait SizeMatcher: Send + Sync {
    /// Stable identifier reported alongside results.
    fn name(&self) -> &'static str;

    fn match_size(
        &self,
        gender: Gender,
        chart: &SizeChart,
        adjusted: &MeasurementSet,
    ) -> RecommendedSize;
}

/// Named selector for the built-in matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    SmallestThenMax,
    JointRangeNearest,
}

impl MatchStrategy {
    pub fn matcher(&self) -> &'static dyn SizeMatcher {
        match self {
            MatchStrategy::SmallestThenMax => &SmallestThenMaxMatcher,
            MatchStrategy::JointRangeNearest => &JointRangeMatcher,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Strategy A — per-field smallest match, then the largest across fields
// ────────────────────────────────────────────────────────────────────────────

pub struct SmallestThenMaxMatcher;

/// Smallest size whose range for `field` contains `value`. `None` when no size
/// defines the field or none contains the value.
pub fn size_for_field(chart: &SizeChart, field: Field, value: f64) -> Option<SizeLabel> {
    chart
        .rows
        .iter()
        .find(|row| row.range(field).is_some_and(|r| r.contains(value)))
        .map(|row| row.size)
}

impl SizeMatcher for SmallestThenMaxMatcher {
    fn name(&self) -> &'static str {
        "smallest_then_max"
    }

    fn match_size(
        &self,
        gender: Gender,
        chart: &SizeChart,
        adjusted: &MeasurementSet,
    ) -> RecommendedSize {
        adjusted
            .present()
            // Mens garments are sized on inseam instead of hips.
            .filter(|(field, _)| !(gender == Gender::Mens && *field == Field::Hips))
            .filter_map(|(field, value)| size_for_field(chart, field, value))
            .filter_map(|size| chart.rank(size).map(|rank| (rank, size)))
            .max_by_key(|(rank, _)| *rank)
            .map(|(_, size)| RecommendedSize::Size(size))
            .unwrap_or(RecommendedSize::NoMatch)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Strategy B — joint range intersection with nearest-size fallback
// ────────────────────────────────────────────────────────────────────────────

pub struct JointRangeMatcher;

/// Fields that must fit jointly. Inseam does not take part.
const JOINT_FIELDS: [Field; 7] = [
    Field::Chest,
    Field::Waist,
    Field::Hips,
    Field::Shoulders,
    Field::Neck,
    Field::Thigh,
    Field::Calf,
];

/// Fields used to rank sizes when nothing fits jointly.
const DISTANCE_FIELDS: [Field; 3] = [Field::Chest, Field::Waist, Field::Hips];

impl JointRangeMatcher {
    fn fits(row: &SizeRow, adjusted: &MeasurementSet) -> bool {
        JOINT_FIELDS.iter().all(|field| {
            match (adjusted.get(*field), row.range(*field)) {
                (Some(value), Some(range)) => range.contains(value),
                _ => true,
            }
        })
    }

    /// Sum of squared distances to the nearest range edge over chest/waist/hips.
    pub fn distance(row: &SizeRow, adjusted: &MeasurementSet) -> f64 {
        DISTANCE_FIELDS
            .iter()
            .filter_map(|field| {
                let value = adjusted.get(*field)?;
                let range = row.range(*field)?;
                Some(range.squared_distance(value))
            })
            .sum()
    }
}

impl SizeMatcher for JointRangeMatcher {
    fn name(&self) -> &'static str {
        "joint_range_nearest"
    }

    fn match_size(
        &self,
        _gender: Gender,
        chart: &SizeChart,
        adjusted: &MeasurementSet,
    ) -> RecommendedSize {
        if let Some(row) = chart.rows.iter().find(|row| Self::fits(row, adjusted)) {
            return RecommendedSize::Size(row.size);
        }

        // Strictly-less comparison keeps the earliest (smallest) size on ties.
        let mut best: Option<(f64, SizeLabel)> = None;
        for row in chart.rows {
            let dist = Self::distance(row, adjusted);
            if best.map_or(true, |(best_dist, _)| dist < best_dist) {
                best = Some((dist, row.size));
            }
        }

        best.map(|(_, size)| RecommendedSize::Size(size))
            .unwrap_or(RecommendedSize::NoMatch)
    }
}
