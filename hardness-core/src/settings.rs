use crate::spc::ControlLimits;
use history::StoreConfig;
use records::MeasurementGroup;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SETTINGS_FILE: &str = "hardness.toml";

pub const CHART_MIN_WIDTH: u32 = 320;
pub const CHART_MIN_HEIGHT: u32 = 240;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub store: StoreConfig,
    pub limits: LimitDefaults,
    pub entry: EntryLimits,
    pub chart: ChartSettings,
}

/// Limits used for a group until it has enough history of its own.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitDefaults {
    pub bottom: ControlLimits,
    pub top: ControlLimits,
}

impl LimitDefaults {
    pub fn for_group(&self, group: MeasurementGroup) -> ControlLimits {
        match group {
            MeasurementGroup::Bottom => self.bottom,
            MeasurementGroup::Top => self.top,
        }
    }
}

/// Bounds the entry form enforces before anything reaches the SPC engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryLimits {
    pub max_initials_len: usize,
    pub max_sample_id_len: usize,
    pub min_hardness: f64,
    pub max_hardness: f64,
}

impl Default for EntryLimits {
    fn default() -> Self {
        Self {
            max_initials_len: 50,
            max_sample_id_len: 100,
            min_hardness: 0.0,
            max_hardness: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub width: u32,
    pub height: u32,
    pub dark_theme: bool,
    /// Titles, axis labels and legends.
    pub labels: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 1000,
            dark_theme: false,
            labels: true,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write settings file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("default {group} limits must satisfy ucl >= mean >= lcl")]
    UnorderedDefaults { group: MeasurementGroup },
    #[error("min_hardness ({min}) must not exceed max_hardness ({max})")]
    HardnessRange { min: f64, max: f64 },
}

pub fn normalize_settings(mut settings: Settings) -> Result<Settings, SettingsError> {
    for group in MeasurementGroup::ALL {
        if !settings.limits.for_group(group).is_ordered() {
            return Err(SettingsError::UnorderedDefaults { group });
        }
    }
    let entry = &mut settings.entry;
    if entry.min_hardness.is_nan()
        || entry.max_hardness.is_nan()
        || entry.min_hardness > entry.max_hardness
    {
        return Err(SettingsError::HardnessRange {
            min: entry.min_hardness,
            max: entry.max_hardness,
        });
    }
    entry.max_initials_len = entry.max_initials_len.max(1);
    entry.max_sample_id_len = entry.max_sample_id_len.max(1);
    settings.chart.width = settings.chart.width.max(CHART_MIN_WIDTH);
    settings.chart.height = settings.chart.height.max(CHART_MIN_HEIGHT);
    Ok(settings)
}

pub fn load_settings_file(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = toml::from_str(&data).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    normalize_settings(settings)
}

/// Reads `path` when it exists; otherwise falls back to built-in defaults.
pub fn load_or_default(path: &Path) -> Result<Settings, SettingsError> {
    if path.exists() {
        log::info!("loading settings from {}", path.display());
        load_settings_file(path)
    } else {
        log::debug!("no settings at {}, using defaults", path.display());
        Ok(Settings::default())
    }
}

pub fn save_settings_file(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    let data = toml::to_string_pretty(settings)?;
    std::fs::write(path, data).map_err(|source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use history::StoreKind;

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [store]
            path = "data/readings.json"

            [limits.top]
            mean = 250.0
            ucl = 270.0
            lcl = 230.0
            "#,
        )
        .expect("parse");

        assert_eq!(settings.store.kind, StoreKind::Json);
        assert_eq!(settings.store.path, PathBuf::from("data/readings.json"));
        assert_eq!(settings.limits.top.mean, 250.0);
        assert_eq!(settings.limits.bottom, ControlLimits::FACTORY_DEFAULT);
        assert_eq!(settings.entry.max_sample_id_len, 100);
    }

    #[test]
    fn inverted_defaults_are_rejected() {
        let mut settings = Settings::default();
        settings.limits.bottom = ControlLimits {
            mean: 320.0,
            ucl: 300.0,
            lcl: 340.0,
        };
        assert!(matches!(
            normalize_settings(settings),
            Err(SettingsError::UnorderedDefaults {
                group: MeasurementGroup::Bottom
            })
        ));
    }

    #[test]
    fn tiny_charts_are_clamped() {
        let mut settings = Settings::default();
        settings.chart.width = 10;
        settings.chart.height = 0;
        let settings = normalize_settings(settings).expect("normalize");
        assert_eq!(settings.chart.width, CHART_MIN_WIDTH);
        assert_eq!(settings.chart.height, CHART_MIN_HEIGHT);
    }

    #[test]
    fn save_reports_unusable_parent_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").expect("write blocker");
        let path = blocker.join("nested").join(DEFAULT_SETTINGS_FILE);

        match save_settings_file(&path, &Settings::default()) {
            Err(SettingsError::Write { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected write error, got {other:?}"),
        }
    }

    #[test]
    fn hardness_range_must_be_ordered() {
        let mut settings = Settings::default();
        settings.entry.min_hardness = 500.0;
        settings.entry.max_hardness = 100.0;
        assert!(normalize_settings(settings).is_err());
    }
}
