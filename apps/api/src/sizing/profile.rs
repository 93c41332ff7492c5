//! Sizing profiles — named, immutable bundles of chart data and policies.
//!
//! `tuned` matches each field independently and takes the largest size;
//! `mimic` requires a joint fit, reads shoulders during shape inference and
//! reports dominant measurements with guidance.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::sizing::charts::{ChartSet, MIMIC_CHARTS, TUNED_CHARTS};
use crate::sizing::diagnostics::{ConsistencyPolicy, HealthPolicy};
use crate::sizing::matcher::MatchStrategy;
use crate::sizing::shape::ShapeRules;
use crate::sizing::SizingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileName {
    Tuned,
    Mimic,
}

impl ProfileName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileName::Tuned => "tuned",
            ProfileName::Mimic => "mimic",
        }
    }

    pub fn profile(&self) -> &'static SizingProfile {
        match self {
            ProfileName::Tuned => &TUNED,
            ProfileName::Mimic => &MIMIC,
        }
    }
}

impl FromStr for ProfileName {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tuned" => Ok(ProfileName::Tuned),
            "mimic" => Ok(ProfileName::Mimic),
            _ => Err(SizingError::UnknownProfile(s.to_string())),
        }
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct SizingProfile {
    pub name: ProfileName,
    pub charts: &'static ChartSet,
    pub shape_rules: ShapeRules,
    pub strategy: MatchStrategy,
    pub health: HealthPolicy,
    pub consistency: ConsistencyPolicy,
    /// Whether dominant measurements and guidance are reported.
    pub reports_dominance: bool,
}

pub static TUNED: SizingProfile = SizingProfile {
    name: ProfileName::Tuned,
    charts: &TUNED_CHARTS,
    shape_rules: ShapeRules::Basic,
    strategy: MatchStrategy::SmallestThenMax,
    health: HealthPolicy::Global,
    consistency: ConsistencyPolicy::Ratio,
    reports_dominance: false,
};

pub static MIMIC: SizingProfile = SizingProfile {
    name: ProfileName::Mimic,
    charts: &MIMIC_CHARTS,
    shape_rules: ShapeRules::WithShoulders,
    strategy: MatchStrategy::JointRangeNearest,
    health: HealthPolicy::PerField,
    consistency: ConsistencyPolicy::Proportion,
    reports_dominance: true,
};
