//! Morphology table and the adjuster that applies it.
//!
//! A morphology label (inferred body shape or a caller-supplied hint) maps to
//! signed centimeter deltas on chest, waist and hips. Deltas from every
//! recognised label are summed; unknown labels are ignored.

use std::collections::BTreeMap;

use crate::sizing::models::{Field, Gender, MeasurementSet};

/// Accumulated `Field → delta` mapping. Ordered by field for stable output.
pub type Adjustments = BTreeMap<Field, i32>;

type MorphologyEntry = (&'static str, &'static [(Field, i32)]);

const WOMENS: &[MorphologyEntry] = &[
    ("hourglass", &[(Field::Hips, 2), (Field::Waist, -1)]),
    ("pear", &[(Field::Hips, 3), (Field::Waist, 0)]),
    ("apple", &[(Field::Waist, 3), (Field::Hips, -1)]),
    ("rectangle", &[(Field::Waist, 1), (Field::Hips, 0)]),
    ("inverted_triangle", &[(Field::Chest, 2), (Field::Waist, 0)]),
    ("spoon", &[(Field::Hips, 3), (Field::Waist, 1)]),
    ("diamond", &[(Field::Waist, 2), (Field::Hips, 0)]),
];

const MENS: &[MorphologyEntry] = &[
    ("triangle", &[(Field::Chest, 2), (Field::Waist, -1)]),
    ("rectangle", &[]),
    ("inverted_triangle", &[(Field::Chest, 2)]),
    ("oval", &[(Field::Waist, 3)]),
    ("trapezoid", &[]),
];

const MATERNITY: &[MorphologyEntry] = &[
    ("prominent", &[(Field::Waist, 4), (Field::Hips, 1)]),
    ("soft", &[(Field::Waist, 2)]),
    ("flat", &[]),
];

fn table(gender: Gender) -> &'static [MorphologyEntry] {
    match gender {
        Gender::Womens => WOMENS,
        Gender::Mens => MENS,
        Gender::Maternity => MATERNITY,
    }
}

/// Deltas registered for `label`, or `None` when the label is unknown for the gender.
pub fn lookup(gender: Gender, label: &str) -> Option<&'static [(Field, i32)]> {
    table(gender)
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, deltas)| *deltas)
}

/// Sums the deltas of every recognised label. Labels are not deduplicated:
/// the same label passed twice contributes twice. Explicit zero deltas are
/// kept in the result.
pub fn accumulate_adjustments<'a, I>(gender: Gender, labels: I) -> Adjustments
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut adjustments = Adjustments::new();
    for label in labels.into_iter().flatten() {
        if let Some(deltas) = lookup(gender, label) {
            for (field, delta) in deltas {
                *adjustments.entry(*field).or_insert(0) += delta;
            }
        }
    }
    adjustments
}

/// Applies deltas to chest, waist and hips. Absent measurements stay absent;
/// all other fields pass through unchanged.
pub fn apply_adjustments(raw: &MeasurementSet, adjustments: &Adjustments) -> MeasurementSet {
    let mut adjusted = *raw;
    for field in Field::ADJUSTABLE {
        let delta = adjustments.get(&field).copied().unwrap_or(0);
        adjusted.set(field, raw.get(field).map(|v| v + f64::from(delta)));
    }
    adjusted
}
