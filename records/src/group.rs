use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of measurement positions recorded per group in one entry.
pub const POSITIONS_PER_GROUP: usize = 6;

/// The two independently tracked hardness groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementGroup {
    Bottom,
    Top,
}

impl MeasurementGroup {
    pub const ALL: [MeasurementGroup; 2] = [MeasurementGroup::Bottom, MeasurementGroup::Top];

    pub fn name(self) -> &'static str {
        match self {
            MeasurementGroup::Bottom => "Bottom",
            MeasurementGroup::Top => "Top",
        }
    }
}

impl fmt::Display for MeasurementGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown measurement group '{0}' (expected 'bottom' or 'top')")]
pub struct UnknownGroup(pub String);

impl FromStr for MeasurementGroup {
    type Err = UnknownGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bottom" => Ok(MeasurementGroup::Bottom),
            "top" => Ok(MeasurementGroup::Top),
            _ => Err(UnknownGroup(s.to_string())),
        }
    }
}
