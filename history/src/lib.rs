use records::{MeasurementGroup, ReadingRecord, RecordLog, RecordsError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    Json,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub kind: StoreKind,
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::Json,
            path: PathBuf::from("hardness_readings.json"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("record store '{}' is unavailable: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: RecordsError,
    },
    #[error("failed to write record store '{}': {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: RecordsError,
    },
}

/// Persistent, append-only storage of hardness readings.
pub trait HistoryStore {
    /// Prepares the backing storage; safe to call repeatedly.
    fn ensure_ready(&mut self) -> Result<(), StoreError>;
    /// Every stored value for `group`, oldest first.
    fn fetch_history(&self, group: MeasurementGroup) -> Result<Vec<f64>, StoreError>;
    /// Appends `records` and returns how many were written.
    fn append(&mut self, records: &[ReadingRecord]) -> Result<usize, StoreError>;
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    log: RecordLog,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ReadingRecord>) -> Self {
        Self {
            log: RecordLog { records },
        }
    }
}

impl HistoryStore for InMemoryStore {
    fn ensure_ready(&mut self) -> Result<(), StoreError> {
        Ok(())
    }

    fn fetch_history(&self, group: MeasurementGroup) -> Result<Vec<f64>, StoreError> {
        Ok(self.log.series_for(group))
    }

    fn append(&mut self, records: &[ReadingRecord]) -> Result<usize, StoreError> {
        self.log.append(records);
        Ok(records.len())
    }
}

/// Stores the whole record log as one pretty-printed JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<RecordLog, StoreError> {
        RecordLog::load_from_file(&self.path).map_err(|source| StoreError::Unavailable {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, log: &RecordLog) -> Result<(), StoreError> {
        log.save_to_file(&self.path)
            .map_err(|source| StoreError::WriteFailed {
                path: self.path.clone(),
                source,
            })
    }
}

impl HistoryStore for JsonFileStore {
    fn ensure_ready(&mut self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteFailed {
                    path: self.path.clone(),
                    source: RecordsError::Io(e),
                })?;
            }
        }
        self.write(&RecordLog::new())?;
        log::info!("created record store at {}", self.path.display());
        Ok(())
    }

    fn fetch_history(&self, group: MeasurementGroup) -> Result<Vec<f64>, StoreError> {
        let series = self.load()?.series_for(group);
        log::debug!("fetched {} historical {group} values", series.len());
        Ok(series)
    }

    fn append(&mut self, records: &[ReadingRecord]) -> Result<usize, StoreError> {
        let mut log = if self.path.exists() {
            self.load()?
        } else {
            RecordLog::new()
        };
        log.append(records);
        self.write(&log)?;
        Ok(records.len())
    }
}

pub struct StoreFactory;

impl StoreFactory {
    pub fn create(config: &StoreConfig) -> Box<dyn HistoryStore> {
        match config.kind {
            StoreKind::Json => Box::new(JsonFileStore::new(config.path.clone())),
            StoreKind::Memory => Box::new(InMemoryStore::new()),
        }
    }
}
