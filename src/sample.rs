use std::fmt;
use std::str::FromStr;

use crate::error::{DataError, Result};

// ---------------------------------------------------------------------------
// Partition – one of the three fixed dataset splits
// ---------------------------------------------------------------------------

/// Dataset split a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Partition {
    Train,
    Dev,
    Test,
}

impl Partition {
    pub const ALL: [Partition; 3] = [Partition::Train, Partition::Dev, Partition::Test];

    pub fn as_str(self) -> &'static str {
        match self {
            Partition::Train => "train",
            Partition::Dev => "dev",
            Partition::Test => "test",
        }
    }

    /// Largest index accepted for this partition.
    ///
    /// Sessions are numbered from 1, so these are also the session counts.
    /// Index 0 is still accepted and resolves to a name that has no file.
    pub fn max_index(self) -> i64 {
        match self {
            Partition::Train => 104,
            Partition::Dev => 60,
            Partition::Test => 54,
        }
    }

    /// Canonical sample identifier, e.g. `train_005`.
    pub fn sample_name(self, index: i64) -> Result<String> {
        if index < 0 {
            return Err(DataError::NegativeIndex(index));
        }
        let max = self.max_index();
        if index > max {
            return Err(DataError::SampleOutOfRange {
                partition: self,
                index,
                max,
            });
        }
        Ok(format!("{}_{index:03}", self.as_str()))
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Partition {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "train" => Ok(Partition::Train),
            "dev" => Ok(Partition::Dev),
            "test" => Ok(Partition::Test),
            other => Err(DataError::UnknownPartition(other.to_string())),
        }
    }
}

/// Resolve a sample name from a partition name and index.
///
/// The index is validated before the partition name, so `("foo", -1)`
/// reports the negative index.
pub fn get_sample(partition: &str, index: i64) -> Result<String> {
    if index < 0 {
        return Err(DataError::NegativeIndex(index));
    }
    partition.parse::<Partition>()?.sample_name(index)
}
