use records::POSITIONS_PER_GROUP;
use serde::{Deserialize, Serialize};

/// Six readings for one group, indexed by position 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingBatch([f64; POSITIONS_PER_GROUP]);

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BatchError {
    #[error("a reading batch needs exactly {expected} values, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

impl ReadingBatch {
    pub fn new(values: [f64; POSITIONS_PER_GROUP]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// `(position, value)` pairs in position order.
    pub fn positions(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(idx, value)| (idx as u8 + 1, *value))
    }
}

impl TryFrom<&[f64]> for ReadingBatch {
    type Error = BatchError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let array: [f64; POSITIONS_PER_GROUP] =
            values.try_into().map_err(|_| BatchError::WrongLength {
                expected: POSITIONS_PER_GROUP,
                actual: values.len(),
            })?;
        Ok(Self(array))
    }
}
