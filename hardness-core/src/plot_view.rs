use crate::batch::{BatchError, ReadingBatch};
use crate::spc::{ControlLimits, ResolvedLimits};
use records::{MeasurementGroup, POSITIONS_PER_GROUP};
use serde::{Deserialize, Serialize};

pub const X_AXIS_LABEL: &str = "Position";
pub const Y_AXIS_LABEL: &str = "Hardness Value (Brinell Hardness - BHN)";
pub const SERIES_LABEL: &str = "Current Reading";

const RANGE_PADDING_RATIO: f64 = 0.1;
const FLAT_RANGE_PADDING: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YAxisRange {
    pub min: f64,
    pub max: f64,
}

impl YAxisRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Mean,
    Ucl,
    Lcl,
}

impl ReferenceKind {
    pub fn short_name(self) -> &'static str {
        match self {
            ReferenceKind::Mean => "Mean",
            ReferenceKind::Ucl => "UCL",
            ReferenceKind::Lcl => "LCL",
        }
    }
}

/// A horizontal line across the whole chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub kind: ReferenceKind,
    pub value: f64,
    pub label: String,
}

/// Everything a renderer needs to draw one group's chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotState {
    pub group: MeasurementGroup,
    /// Batch values in position order; empty before anything is entered.
    pub series: Vec<f64>,
    pub limits: ResolvedLimits,
    pub y_range: YAxisRange,
}

impl PlotState {
    /// Builds from a raw value slice, rejecting anything but 0 or 6 values.
    pub fn from_values(
        group: MeasurementGroup,
        values: &[f64],
        limits: ResolvedLimits,
    ) -> Result<Self, BatchError> {
        if values.is_empty() {
            return Ok(build_plot_state(group, None, limits));
        }
        let batch = ReadingBatch::try_from(values)?;
        Ok(build_plot_state(group, Some(&batch), limits))
    }

    pub fn mean(&self) -> f64 {
        self.limits.limits.mean
    }

    pub fn ucl(&self) -> f64 {
        self.limits.limits.ucl
    }

    pub fn lcl(&self) -> f64 {
        self.limits.limits.lcl
    }

    pub fn title(&self) -> String {
        format!("{} Hardness Readings", self.group)
    }

    /// `(position, value)` points of the entered batch.
    pub fn points(&self) -> Vec<(f64, f64)> {
        x_positions()
            .zip(&self.series)
            .map(|(position, value)| (f64::from(position), *value))
            .collect()
    }

    pub fn reference_lines(&self) -> Vec<ReferenceLine> {
        [
            (ReferenceKind::Mean, self.mean()),
            (ReferenceKind::Ucl, self.ucl()),
            (ReferenceKind::Lcl, self.lcl()),
        ]
        .into_iter()
        .map(|(kind, value)| ReferenceLine {
            kind,
            value,
            label: format!("{} ({value:.2})", kind.short_name()),
        })
        .collect()
    }
}

/// X positions shown on every chart, whether or not a batch is present.
pub fn x_positions() -> impl Iterator<Item = u8> {
    1..=POSITIONS_PER_GROUP as u8
}

/// Axis range covering the series and all three limit lines, padded by 10%
/// of the span and floored at zero.
pub fn compute_y_range(series: &[f64], limits: &ControlLimits) -> YAxisRange {
    let candidates = series
        .iter()
        .copied()
        .chain([limits.mean, limits.ucl, limits.lcl]);
    let (lo, hi) = candidates.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = hi - lo;
    let padding = if span > 0.0 {
        span * RANGE_PADDING_RATIO
    } else {
        FLAT_RANGE_PADDING
    };
    YAxisRange {
        min: (lo - padding).min(0.0),
        max: hi + padding,
    }
}

pub fn build_plot_state(
    group: MeasurementGroup,
    batch: Option<&ReadingBatch>,
    limits: ResolvedLimits,
) -> PlotState {
    let series = batch.map(|b| b.values().to_vec()).unwrap_or_default();
    let y_range = compute_y_range(&series, &limits.limits);
    PlotState {
        group,
        series,
        limits,
        y_range,
    }
}
