//! Shewhart-style control limits derived from the recorded history of a group.

use records::MeasurementGroup;
use serde::{Deserialize, Serialize};

/// Control limits sit this many sample standard deviations from the mean.
pub const SIGMA_MULTIPLIER: f64 = 3.0;

/// Minimum history length for which a sample standard deviation exists.
pub const MIN_HISTORY_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlLimits {
    pub mean: f64,
    pub ucl: f64,
    pub lcl: f64,
}

impl ControlLimits {
    pub const FACTORY_DEFAULT: ControlLimits = ControlLimits {
        mean: 320.0,
        ucl: 340.0,
        lcl: 300.0,
    };

    /// True when `ucl >= mean >= lcl` and every value is finite.
    pub fn is_ordered(&self) -> bool {
        self.mean.is_finite()
            && self.ucl.is_finite()
            && self.lcl.is_finite()
            && self.ucl >= self.mean
            && self.mean >= self.lcl
    }
}

impl Default for ControlLimits {
    fn default() -> Self {
        Self::FACTORY_DEFAULT
    }
}

/// Where a set of resolved limits came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitSource {
    History,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLimits {
    #[serde(flatten)]
    pub limits: ControlLimits,
    pub source: LimitSource,
}

pub fn mean(series: &[f64]) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    Some(series.iter().sum::<f64>() / series.len() as f64)
}

/// Bessel-corrected standard deviation; `None` below two values.
pub fn sample_std_dev(series: &[f64]) -> Option<f64> {
    if series.len() < MIN_HISTORY_LEN {
        return None;
    }
    let mean = mean(series)?;
    let squared: f64 = series.iter().map(|v| (v - mean).powi(2)).sum();
    Some((squared / (series.len() - 1) as f64).sqrt())
}

/// Mean ± 3σ over the full series, or `None` when there is too little history.
pub fn compute_limits(series: &[f64]) -> Option<ControlLimits> {
    let std_dev = sample_std_dev(series)?;
    let mean = mean(series)?;
    Some(ControlLimits {
        mean,
        ucl: mean + SIGMA_MULTIPLIER * std_dev,
        lcl: mean - SIGMA_MULTIPLIER * std_dev,
    })
}

/// Limits for `group`, substituting `defaults` when history is insufficient.
pub fn resolve_limits(
    group: MeasurementGroup,
    series: &[f64],
    defaults: ControlLimits,
) -> ResolvedLimits {
    match compute_limits(series) {
        Some(limits) => ResolvedLimits {
            limits,
            source: LimitSource::History,
        },
        None => {
            log::debug!(
                "using default {group} SPC limits ({} historical values)",
                series.len()
            );
            ResolvedLimits {
                limits: defaults,
                source: LimitSource::Default,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn too_little_history_is_undefined() {
        assert_eq!(compute_limits(&[]), None);
        assert_eq!(compute_limits(&[305.0]), None);
    }

    #[test]
    fn three_sigma_limits_from_history() {
        let limits = compute_limits(&[310.0, 320.0, 330.0]).expect("limits");
        assert!(close(limits.mean, 320.0));
        assert!(close(sample_std_dev(&[310.0, 320.0, 330.0]).unwrap(), 10.0));
        assert!(close(limits.ucl, 350.0));
        assert!(close(limits.lcl, 290.0));
    }

    #[test]
    fn limits_are_symmetric_and_ordered() {
        let series = [298.4, 301.2, 317.9, 322.0, 309.3, 333.3, 312.8];
        let limits = compute_limits(&series).expect("limits");
        assert!(limits.lcl <= limits.mean && limits.mean <= limits.ucl);
        assert!(close(limits.ucl - limits.mean, limits.mean - limits.lcl));
        assert!(limits.is_ordered());
    }

    #[test]
    fn constant_history_collapses_to_the_mean() {
        let limits = compute_limits(&[315.0, 315.0]).expect("limits");
        assert_eq!(limits.mean, 315.0);
        assert_eq!(limits.ucl, 315.0);
        assert_eq!(limits.lcl, 315.0);
    }

    #[test]
    fn order_of_history_does_not_matter() {
        let forward = compute_limits(&[300.0, 305.0, 340.0, 322.5]).unwrap();
        let reversed = compute_limits(&[322.5, 340.0, 305.0, 300.0]).unwrap();
        assert!(close(forward.mean, reversed.mean));
        assert!(close(forward.ucl, reversed.ucl));
        assert!(close(forward.lcl, reversed.lcl));
    }

    #[test]
    fn repeated_computation_is_bit_identical() {
        let series = vec![301.7, 299.1, 318.25, 327.0, 311.11];
        let first = compute_limits(&series).unwrap();
        let second = compute_limits(&series).unwrap();
        assert_eq!(first.mean.to_bits(), second.mean.to_bits());
        assert_eq!(first.ucl.to_bits(), second.ucl.to_bits());
        assert_eq!(first.lcl.to_bits(), second.lcl.to_bits());
    }

    #[test]
    fn resolve_falls_back_to_group_defaults() {
        let defaults = ControlLimits {
            mean: 200.0,
            ucl: 220.0,
            lcl: 180.0,
        };
        let resolved = resolve_limits(MeasurementGroup::Top, &[305.0], defaults);
        assert_eq!(resolved.source, LimitSource::Default);
        assert_eq!(resolved.limits, defaults);

        let resolved = resolve_limits(MeasurementGroup::Top, &[310.0, 330.0], defaults);
        assert_eq!(resolved.source, LimitSource::History);
        assert!(close(resolved.limits.mean, 320.0));
    }

    #[test]
    fn factory_defaults_match_shop_floor_values() {
        let defaults = ControlLimits::default();
        assert_eq!(defaults.mean, 320.0);
        assert_eq!(defaults.ucl, 340.0);
        assert_eq!(defaults.lcl, 300.0);
    }
}
