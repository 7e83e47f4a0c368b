use std::path::PathBuf;

use thiserror::Error;

use crate::sample::Partition;

/// Everything that can go wrong while resolving or reading dataset files.
#[derive(Debug, Error)]
pub enum DataError {
    /// Sample indices start at zero.
    #[error("incorrect sample index {0}: must not be negative")]
    NegativeIndex(i64),

    #[error("incorrect partition '{0}': expected train, dev or test")]
    UnknownPartition(String),

    #[error("sample {index} does not exist in the {partition} partition (last index is {max})")]
    SampleOutOfRange {
        partition: Partition,
        index: i64,
        max: i64,
    },

    /// A feature or descriptor name that none of the loaders know about.
    #[error("unknown {kind} name '{name}'")]
    UnknownFeature { kind: &'static str, name: String },

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("reading table {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed ARFF file {} (line {line}): {message}", .path.display())]
    Arff {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("table has no column '{0}'")]
    MissingColumn(String),
}

pub type Result<T, E = DataError> = std::result::Result<T, E>;
