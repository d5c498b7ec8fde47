use crate::batch::ReadingBatch;
use crate::settings::EntryLimits;
use crate::validation::Validator;
use records::{MeasurementGroup, ReadingRecord, POSITIONS_PER_GROUP};

/// Raw text exactly as typed into the entry form.
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    pub technician_initials: String,
    pub sample_id: String,
    pub bottom: [String; POSITIONS_PER_GROUP],
    pub top: [String; POSITIONS_PER_GROUP],
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EntryError {
    #[error("Technician Initials are required!")]
    MissingInitials,
    #[error("Sample ID is required!")]
    MissingSampleId,
    #[error("Technician Initials must be at most {max} characters!")]
    InitialsTooLong { max: usize },
    #[error("Sample ID must be at most {max} characters!")]
    SampleIdTooLong { max: usize },
    #[error("{group} {position} Hardness is empty!")]
    EmptyReading {
        group: MeasurementGroup,
        position: usize,
    },
    #[error("{group} {position} Hardness must be a valid number!")]
    InvalidNumber {
        group: MeasurementGroup,
        position: usize,
    },
    #[error("{group} {position} Hardness must be between {min} and {max}!")]
    OutOfRange {
        group: MeasurementGroup,
        position: usize,
        min: f64,
        max: f64,
    },
}

/// A validated entry waiting to be reviewed and saved.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEntry {
    pub technician_initials: String,
    pub sample_id: String,
    pub bottom: ReadingBatch,
    pub top: ReadingBatch,
}

impl EntryForm {
    pub fn new(
        technician_initials: impl Into<String>,
        sample_id: impl Into<String>,
        bottom: [String; POSITIONS_PER_GROUP],
        top: [String; POSITIONS_PER_GROUP],
    ) -> Self {
        Self {
            technician_initials: technician_initials.into(),
            sample_id: sample_id.into(),
            bottom,
            top,
        }
    }

    pub fn fields(&self, group: MeasurementGroup) -> &[String; POSITIONS_PER_GROUP] {
        match group {
            MeasurementGroup::Bottom => &self.bottom,
            MeasurementGroup::Top => &self.top,
        }
    }

    /// Checks fields in form order and stops at the first problem.
    pub fn validate(&self, limits: &EntryLimits) -> Result<PendingEntry, EntryError> {
        let initials = self.technician_initials.trim();
        let sample_id = self.sample_id.trim();

        if !Validator::is_present(initials) {
            return Err(EntryError::MissingInitials);
        }
        if !Validator::is_present(sample_id) {
            return Err(EntryError::MissingSampleId);
        }
        if !Validator::fits_length(initials, limits.max_initials_len) {
            return Err(EntryError::InitialsTooLong {
                max: limits.max_initials_len,
            });
        }
        if !Validator::fits_length(sample_id, limits.max_sample_id_len) {
            return Err(EntryError::SampleIdTooLong {
                max: limits.max_sample_id_len,
            });
        }

        Ok(PendingEntry {
            technician_initials: initials.to_string(),
            sample_id: sample_id.to_string(),
            bottom: self.parse_group(MeasurementGroup::Bottom, limits)?,
            top: self.parse_group(MeasurementGroup::Top, limits)?,
        })
    }

    fn parse_group(
        &self,
        group: MeasurementGroup,
        limits: &EntryLimits,
    ) -> Result<ReadingBatch, EntryError> {
        let mut values = [0.0; POSITIONS_PER_GROUP];
        for (idx, raw) in self.fields(group).iter().enumerate() {
            let position = idx + 1;
            let raw = raw.trim();
            if raw.is_empty() {
                return Err(EntryError::EmptyReading { group, position });
            }
            let value: f64 = raw
                .parse()
                .ok()
                .filter(|v: &f64| v.is_finite())
                .ok_or(EntryError::InvalidNumber { group, position })?;
            if !Validator::in_range(value, limits.min_hardness, limits.max_hardness) {
                return Err(EntryError::OutOfRange {
                    group,
                    position,
                    min: limits.min_hardness,
                    max: limits.max_hardness,
                });
            }
            values[idx] = value;
        }
        Ok(ReadingBatch::new(values))
    }
}

impl PendingEntry {
    pub fn batch(&self, group: MeasurementGroup) -> &ReadingBatch {
        match group {
            MeasurementGroup::Bottom => &self.bottom,
            MeasurementGroup::Top => &self.top,
        }
    }

    /// One record per reading, Bottom positions first, then Top.
    pub fn records(&self, recorded_at: u64) -> Vec<ReadingRecord> {
        MeasurementGroup::ALL
            .into_iter()
            .flat_map(|group| {
                self.batch(group)
                    .positions()
                    .map(move |(position, value)| ReadingRecord {
                        technician_initials: self.technician_initials.clone(),
                        sample_id: self.sample_id.clone(),
                        group,
                        position,
                        hardness_value: value,
                        recorded_at,
                    })
            })
            .collect()
    }
}
