use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod group;
pub use group::{MeasurementGroup, UnknownGroup, POSITIONS_PER_GROUP};

/// One stored hardness reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    pub technician_initials: String,
    pub sample_id: String,
    pub group: MeasurementGroup,
    /// Position index, 1 through [`POSITIONS_PER_GROUP`].
    pub position: u8,
    pub hardness_value: f64,
    /// Unix timestamp (seconds) of when the reading was saved.
    #[serde(default)]
    pub recorded_at: u64,
}

/// Append-only collection of every saved reading, persisted as a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordLog {
    #[serde(default)]
    pub records: Vec<ReadingRecord>,
}

#[derive(thiserror::Error, Debug)]
pub enum RecordsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RecordLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, records: &[ReadingRecord]) {
        self.records.extend_from_slice(records);
    }

    /// Values for one group, oldest first. Records saved in the same second
    /// keep their insertion order.
    pub fn series_for(&self, group: MeasurementGroup) -> Vec<f64> {
        let mut matching: Vec<&ReadingRecord> =
            self.records.iter().filter(|r| r.group == group).collect();
        matching.sort_by_key(|r| r.recorded_at);
        matching.into_iter().map(|r| r.hardness_value).collect()
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RecordsError> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RecordsError> {
        let data = fs::read(path)?;
        let log = serde_json::from_slice(&data)?;
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(group: MeasurementGroup, position: u8, value: f64, at: u64) -> ReadingRecord {
        ReadingRecord {
            technician_initials: "JD".to_string(),
            sample_id: "S-1".to_string(),
            group,
            position,
            hardness_value: value,
            recorded_at: at,
        }
    }

    #[test]
    fn series_is_split_by_group_and_ordered_by_time() {
        let mut log = RecordLog::new();
        log.append(&[
            record(MeasurementGroup::Bottom, 1, 330.0, 20),
            record(MeasurementGroup::Top, 1, 500.0, 5),
            record(MeasurementGroup::Bottom, 1, 310.0, 10),
            record(MeasurementGroup::Bottom, 2, 320.0, 10),
        ]);

        assert_eq!(
            log.series_for(MeasurementGroup::Bottom),
            vec![310.0, 320.0, 330.0]
        );
        assert_eq!(log.series_for(MeasurementGroup::Top), vec![500.0]);
    }
}
