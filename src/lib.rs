//! Loaders for the bipolar disorder / mania recognition corpus.
//!
//! A [`Dataset`] is bound to one path descriptor ([`DataConfig`]) and reads
//! subject labels, frame-level descriptors, baseline feature sets and the
//! MATLAB-exported baselines into [`Table`]s.
//!
//! ```no_run
//! use mania_data::{Dataset, Lld, Partition};
//!
//! # fn main() -> mania_data::Result<()> {
//! let dataset = Dataset::from_config_file("config/data.json".as_ref())?;
//! let mfcc = dataset.load_lld(Lld::Mfcc, Partition::Train, 5, true)?;
//! println!("{} frames", mfcc.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod dataset;
pub mod error;
pub mod features;
pub mod labels;
pub mod sample;

pub use config::DataConfig;
pub use data::model::{Table, Value};
pub use dataset::{Dataset, MatlabBaseline, MatlabPartition};
pub use error::{DataError, Result};
pub use features::{BaselineFeature, Lld, MatlabFeature};
pub use labels::{LabelSummary, Labels, PartitionedLabels};
pub use sample::{get_sample, Partition};
