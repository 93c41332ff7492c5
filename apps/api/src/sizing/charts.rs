//! Static size charts.
//!
//! Two chart sets are shipped: `TUNED_CHARTS` and `MIMIC_CHARTS`. They agree on
//! chest, waist, hips and inseam and differ on the secondary fields
//! (shoulders, neck, thigh, calf). Rows are listed smallest size first; that
//! order defines size rank.

use crate::sizing::models::Field::{Calf, Chest, Hips, Inseam, Neck, Shoulders, Thigh, Waist};
use crate::sizing::models::{Field, Gender, Range, SizeLabel};

/// One size's ranges. Fields missing from `ranges` are unconstrained for that size.
#[derive(Debug)]
pub struct SizeRow {
    pub size: SizeLabel,
    pub ranges: &'static [(Field, Range)],
}

impl SizeRow {
    pub fn range(&self, field: Field) -> Option<Range> {
        self.ranges
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, r)| *r)
    }
}

/// Per-gender chart. Row index is size rank.
#[derive(Debug)]
pub struct SizeChart {
    pub rows: &'static [SizeRow],
}

impl SizeChart {
    pub fn rank(&self, size: SizeLabel) -> Option<usize> {
        self.rows.iter().position(|row| row.size == size)
    }
}

#[derive(Debug)]
pub struct ChartSet {
    pub womens: SizeChart,
    pub mens: SizeChart,
    pub maternity: SizeChart,
}

impl ChartSet {
    pub fn for_gender(&self, gender: Gender) -> &SizeChart {
        match gender {
            Gender::Womens => &self.womens,
            Gender::Mens => &self.mens,
            Gender::Maternity => &self.maternity,
        }
    }
}

const fn r(low: f64, high: f64) -> Range {
    Range::new(low, high)
}

// ────────────────────────────────────────────────────────────────────────────
// Tuned
// ────────────────────────────────────────────────────────────────────────────

pub static TUNED_CHARTS: ChartSet = ChartSet {
    womens: SizeChart {
        rows: &[
            SizeRow {
                size: SizeLabel::XS,
                ranges: &[
                    (Chest, r(78.0, 83.0)),
                    (Waist, r(60.0, 65.0)),
                    (Hips, r(86.0, 91.0)),
                    (Shoulders, r(35.0, 38.0)),
                    (Neck, r(30.0, 33.0)),
                    (Thigh, r(45.0, 50.0)),
                    (Calf, r(30.0, 35.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::S,
                ranges: &[
                    (Chest, r(84.0, 89.0)),
                    (Waist, r(66.0, 71.0)),
                    (Hips, r(92.0, 97.0)),
                    (Shoulders, r(39.0, 41.0)),
                    (Neck, r(34.0, 36.0)),
                    (Thigh, r(51.0, 56.0)),
                    (Calf, r(36.0, 40.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::M,
                ranges: &[
                    (Chest, r(90.0, 95.0)),
                    (Waist, r(72.0, 77.0)),
                    (Hips, r(98.0, 103.0)),
                    (Shoulders, r(42.0, 44.0)),
                    (Neck, r(37.0, 39.0)),
                    (Thigh, r(57.0, 62.0)),
                    (Calf, r(41.0, 45.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::L,
                ranges: &[
                    (Chest, r(96.0, 102.0)),
                    (Waist, r(78.0, 84.0)),
                    (Hips, r(104.0, 110.0)),
                    (Shoulders, r(45.0, 47.0)),
                    (Neck, r(40.0, 42.0)),
                    (Thigh, r(63.0, 68.0)),
                    (Calf, r(46.0, 50.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::XL,
                ranges: &[
                    (Chest, r(103.0, 109.0)),
                    (Waist, r(85.0, 91.0)),
                    (Hips, r(111.0, 117.0)),
                    (Shoulders, r(48.0, 50.0)),
                    (Neck, r(43.0, 45.0)),
                    (Thigh, r(69.0, 74.0)),
                    (Calf, r(51.0, 55.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::XXL,
                ranges: &[
                    (Chest, r(110.0, 116.0)),
                    (Waist, r(92.0, 98.0)),
                    (Hips, r(118.0, 124.0)),
                    (Shoulders, r(51.0, 53.0)),
                    (Neck, r(46.0, 48.0)),
                    (Thigh, r(75.0, 80.0)),
                    (Calf, r(56.0, 60.0)),
                ],
            },
        ],
    },
    mens: SizeChart {
        rows: &[
            SizeRow {
                size: SizeLabel::XS,
                ranges: &[
                    (Chest, r(81.0, 86.0)),
                    (Waist, r(66.0, 71.0)),
                    (Inseam, r(76.0, 79.0)),
                    (Shoulders, r(40.0, 43.0)),
                    (Neck, r(35.0, 37.0)),
                    (Thigh, r(50.0, 55.0)),
                    (Calf, r(35.0, 38.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::S,
                ranges: &[
                    (Chest, r(87.0, 92.0)),
                    (Waist, r(72.0, 77.0)),
                    (Inseam, r(80.0, 83.0)),
                    (Shoulders, r(44.0, 46.0)),
                    (Neck, r(38.0, 40.0)),
                    (Thigh, r(56.0, 61.0)),
                    (Calf, r(39.0, 43.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::M,
                ranges: &[
                    (Chest, r(93.0, 98.0)),
                    (Waist, r(78.0, 83.0)),
                    (Inseam, r(84.0, 87.0)),
                    (Shoulders, r(47.0, 49.0)),
                    (Neck, r(41.0, 43.0)),
                    (Thigh, r(62.0, 67.0)),
                    (Calf, r(44.0, 48.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::L,
                ranges: &[
                    (Chest, r(99.0, 104.0)),
                    (Waist, r(84.0, 89.0)),
                    (Inseam, r(88.0, 91.0)),
                    (Shoulders, r(50.0, 52.0)),
                    (Neck, r(44.0, 46.0)),
                    (Thigh, r(68.0, 73.0)),
                    (Calf, r(49.0, 53.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::XL,
                ranges: &[
                    (Chest, r(105.0, 110.0)),
                    (Waist, r(90.0, 95.0)),
                    (Inseam, r(92.0, 95.0)),
                    (Shoulders, r(53.0, 55.0)),
                    (Neck, r(47.0, 49.0)),
                    (Thigh, r(74.0, 79.0)),
                    (Calf, r(54.0, 58.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::XXL,
                ranges: &[
                    (Chest, r(111.0, 116.0)),
                    (Waist, r(96.0, 101.0)),
                    (Inseam, r(96.0, 99.0)),
                    (Shoulders, r(56.0, 58.0)),
                    (Neck, r(50.0, 52.0)),
                    (Thigh, r(80.0, 85.0)),
                    (Calf, r(59.0, 63.0)),
                ],
            },
        ],
    },
    maternity: SizeChart {
        rows: &[
            SizeRow {
                size: SizeLabel::S,
                ranges: &[
                    (Chest, r(84.0, 89.0)),
                    (Waist, r(70.0, 75.0)),
                    (Hips, r(92.0, 97.0)),
                    (Shoulders, r(38.0, 41.0)),
                    (Neck, r(32.0, 34.0)),
                    (Thigh, r(47.0, 52.0)),
                    (Calf, r(31.0, 36.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::M,
                ranges: &[
                    (Chest, r(90.0, 95.0)),
                    (Waist, r(76.0, 81.0)),
                    (Hips, r(98.0, 103.0)),
                    (Shoulders, r(42.0, 44.0)),
                    (Neck, r(35.0, 37.0)),
                    (Thigh, r(53.0, 58.0)),
                    (Calf, r(37.0, 41.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::L,
                ranges: &[
                    (Chest, r(96.0, 102.0)),
                    (Waist, r(82.0, 88.0)),
                    (Hips, r(104.0, 110.0)),
                    (Shoulders, r(45.0, 47.0)),
                    (Neck, r(38.0, 40.0)),
                    (Thigh, r(59.0, 64.0)),
                    (Calf, r(42.0, 46.0)),
                ],
            },
        ],
    },
};

// ────────────────────────────────────────────────────────────────────────────
// Mimic
// ────────────────────────────────────────────────────────────────────────────

pub static MIMIC_CHARTS: ChartSet = ChartSet {
    womens: SizeChart {
        rows: &[
            SizeRow {
                size: SizeLabel::XS,
                ranges: &[
                    (Chest, r(78.0, 83.0)),
                    (Waist, r(60.0, 65.0)),
                    (Hips, r(86.0, 91.0)),
                    (Shoulders, r(36.0, 38.0)),
                    (Neck, r(30.0, 32.0)),
                    (Thigh, r(48.0, 52.0)),
                    (Calf, r(32.0, 34.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::S,
                ranges: &[
                    (Chest, r(84.0, 89.0)),
                    (Waist, r(66.0, 71.0)),
                    (Hips, r(92.0, 97.0)),
                    (Shoulders, r(39.0, 41.0)),
                    (Neck, r(33.0, 34.0)),
                    (Thigh, r(53.0, 57.0)),
                    (Calf, r(35.0, 37.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::M,
                ranges: &[
                    (Chest, r(90.0, 95.0)),
                    (Waist, r(72.0, 77.0)),
                    (Hips, r(98.0, 103.0)),
                    (Shoulders, r(42.0, 44.0)),
                    (Neck, r(35.0, 36.0)),
                    (Thigh, r(58.0, 62.0)),
                    (Calf, r(38.0, 40.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::L,
                ranges: &[
                    (Chest, r(96.0, 102.0)),
                    (Waist, r(78.0, 84.0)),
                    (Hips, r(104.0, 110.0)),
                    (Shoulders, r(45.0, 47.0)),
                    (Neck, r(37.0, 39.0)),
                    (Thigh, r(63.0, 67.0)),
                    (Calf, r(41.0, 43.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::XL,
                ranges: &[
                    (Chest, r(103.0, 109.0)),
                    (Waist, r(85.0, 91.0)),
                    (Hips, r(111.0, 117.0)),
                    (Shoulders, r(48.0, 50.0)),
                    (Neck, r(40.0, 41.0)),
                    (Thigh, r(68.0, 72.0)),
                    (Calf, r(44.0, 46.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::XXL,
                ranges: &[
                    (Chest, r(110.0, 116.0)),
                    (Waist, r(92.0, 98.0)),
                    (Hips, r(118.0, 124.0)),
                    (Shoulders, r(51.0, 53.0)),
                    (Neck, r(42.0, 44.0)),
                    (Thigh, r(73.0, 77.0)),
                    (Calf, r(47.0, 49.0)),
                ],
            },
        ],
    },
    mens: SizeChart {
        rows: &[
            SizeRow {
                size: SizeLabel::XS,
                ranges: &[
                    (Chest, r(81.0, 86.0)),
                    (Waist, r(66.0, 71.0)),
                    (Inseam, r(76.0, 79.0)),
                    (Shoulders, r(42.0, 44.0)),
                    (Neck, r(36.0, 37.0)),
                    (Thigh, r(54.0, 58.0)),
                    (Calf, r(34.0, 36.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::S,
                ranges: &[
                    (Chest, r(87.0, 92.0)),
                    (Waist, r(72.0, 77.0)),
                    (Inseam, r(80.0, 83.0)),
                    (Shoulders, r(45.0, 47.0)),
                    (Neck, r(38.0, 39.0)),
                    (Thigh, r(59.0, 63.0)),
                    (Calf, r(37.0, 39.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::M,
                ranges: &[
                    (Chest, r(93.0, 98.0)),
                    (Waist, r(78.0, 83.0)),
                    (Inseam, r(84.0, 87.0)),
                    (Shoulders, r(48.0, 50.0)),
                    (Neck, r(40.0, 41.0)),
                    (Thigh, r(64.0, 68.0)),
                    (Calf, r(40.0, 42.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::L,
                ranges: &[
                    (Chest, r(99.0, 104.0)),
                    (Waist, r(84.0, 89.0)),
                    (Inseam, r(88.0, 91.0)),
                    (Shoulders, r(51.0, 53.0)),
                    (Neck, r(42.0, 43.0)),
                    (Thigh, r(69.0, 73.0)),
                    (Calf, r(43.0, 45.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::XL,
                ranges: &[
                    (Chest, r(105.0, 110.0)),
                    (Waist, r(90.0, 95.0)),
                    (Inseam, r(92.0, 95.0)),
                    (Shoulders, r(54.0, 56.0)),
                    (Neck, r(44.0, 46.0)),
                    (Thigh, r(74.0, 78.0)),
                    (Calf, r(46.0, 48.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::XXL,
                ranges: &[
                    (Chest, r(111.0, 116.0)),
                    (Waist, r(96.0, 101.0)),
                    (Inseam, r(96.0, 99.0)),
                    (Shoulders, r(57.0, 59.0)),
                    (Neck, r(47.0, 48.0)),
                    (Thigh, r(79.0, 83.0)),
                    (Calf, r(49.0, 51.0)),
                ],
            },
        ],
    },
    maternity: SizeChart {
        rows: &[
            SizeRow {
                size: SizeLabel::S,
                ranges: &[
                    (Chest, r(84.0, 89.0)),
                    (Waist, r(70.0, 75.0)),
                    (Hips, r(92.0, 97.0)),
                    (Shoulders, r(38.0, 40.0)),
                    (Neck, r(31.0, 33.0)),
                    (Thigh, r(50.0, 54.0)),
                    (Calf, r(33.0, 35.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::M,
                ranges: &[
                    (Chest, r(90.0, 95.0)),
                    (Waist, r(76.0, 81.0)),
                    (Hips, r(98.0, 103.0)),
                    (Shoulders, r(41.0, 43.0)),
                    (Neck, r(34.0, 35.0)),
                    (Thigh, r(55.0, 59.0)),
                    (Calf, r(36.0, 38.0)),
                ],
            },
            SizeRow {
                size: SizeLabel::L,
                ranges: &[
                    (Chest, r(96.0, 102.0)),
                    (Waist, r(82.0, 88.0)),
                    (Hips, r(104.0, 110.0)),
                    (Shoulders, r(44.0, 46.0)),
                    (Neck, r(36.0, 38.0)),
                    (Thigh, r(60.0, 64.0)),
                    (Calf, r(39.0, 41.0)),
                ],
            },
        ],
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maternity_has_three_sizes_in_order() {
        let sizes: Vec<SizeLabel> = TUNED_CHARTS.maternity.rows.iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![SizeLabel::S, SizeLabel::M, SizeLabel::L]);
    }

    #[test]
    fn test_rank_follows_row_order() {
        let chart = TUNED_CHARTS.for_gender(Gender::Womens);
        assert_eq!(chart.rank(SizeLabel::XS), Some(0));
        assert_eq!(chart.rank(SizeLabel::XXL), Some(5));
        assert_eq!(TUNED_CHARTS.maternity.rank(SizeLabel::XS), None);
    }

    #[test]
    fn test_mens_chart_has_inseam_but_no_hips() {
        for row in TUNED_CHARTS.mens.rows {
            assert!(row.range(Field::Inseam).is_some());
            assert!(row.range(Field::Hips).is_none());
        }
    }

    #[test]
    fn test_primary_fields_contiguous_within_chart() {
        // Each size's chest range starts one centimeter after the previous one ends.
        for set in [&TUNED_CHARTS, &MIMIC_CHARTS] {
            for chart in [&set.womens, &set.mens, &set.maternity] {
                for pair in chart.rows.windows(2) {
                    let prev = pair[0].range(Field::Chest).unwrap();
                    let next = pair[1].range(Field::Chest).unwrap();
                    assert_eq!(next.low, prev.high + 1.0);
                }
            }
        }
    }

    #[test]
    fn test_variants_differ_only_on_secondary_fields() {
        let tuned = &TUNED_CHARTS.womens.rows[0];
        let mimic = &MIMIC_CHARTS.womens.rows[0];
        assert_eq!(tuned.range(Field::Chest), mimic.range(Field::Chest));
        assert_ne!(tuned.range(Field::Shoulders), mimic.range(Field::Shoulders));
    }
}
