use std::path::{Path, PathBuf};

use crate::config::DataConfig;
use crate::data::loader::{read_table, TableFormat};
use crate::data::model::Table;
use crate::error::Result;
use crate::features::{BaselineFeature, Lld, MatlabFeature, MatlabSource};
use crate::labels::{split_labels, LabelSummary, Labels, LABEL_FILE};
use crate::sample::Partition;

// ---------------------------------------------------------------------------
// MATLAB baseline results
// ---------------------------------------------------------------------------

/// Data, labels and instance ids of one side of a MATLAB split export.
#[derive(Debug, Clone, PartialEq)]
pub struct MatlabPartition {
    pub data: Table,
    pub label: Table,
    pub inst: Table,
}

/// A loaded MATLAB baseline; the variant follows the feature's export shape.
#[derive(Debug, Clone, PartialEq)]
pub enum MatlabBaseline {
    /// AU, BoW and eGeMAPS: every instance in one table.
    Combined(Table),
    /// Deep and MFCC: train and test exported separately.
    Split {
        train: MatlabPartition,
        test: MatlabPartition,
    },
}

// ---------------------------------------------------------------------------
// Dataset – configuration-bound loaders
// ---------------------------------------------------------------------------

/// Entry point for every loader, bound to one path configuration.
#[derive(Debug, Clone)]
pub struct Dataset {
    config: DataConfig,
}

impl Dataset {
    pub fn new(config: DataConfig) -> Self {
        Dataset { config }
    }

    /// Read the configuration at `path` and bind to it.
    pub fn from_config_file(path: &Path) -> Result<Self> {
        DataConfig::from_path(path).map(Dataset::new)
    }

    pub fn config(&self) -> &DataConfig {
        &self.config
    }

    // -- Labels --

    pub fn label_path(&self) -> PathBuf {
        self.config.data_path_local.label_metadata.join(LABEL_FILE)
    }

    /// The label table as stored on disk.
    pub fn label_table(&self) -> Result<Table> {
        read_table(&self.label_path(), TableFormat::COMMA)
    }

    pub fn label_summary(&self) -> Result<LabelSummary> {
        LabelSummary::from_table(&self.label_table()?)
    }

    /// YMRS and mania-level labels, split into dev/train when `partition`.
    pub fn load_label(&self, partition: bool, verbose: bool) -> Result<Labels> {
        let table = self.label_table()?;
        if verbose {
            LabelSummary::from_table(&table)?.log();
        }
        split_labels(&table, partition)
    }

    // -- Per-session features --

    pub fn lld_path(&self, lld: Lld, partition: Partition, index: i64) -> Result<PathBuf> {
        let sample = partition.sample_name(index)?;
        Ok(lld.base_dir(&self.config).join(lld.file_name(&sample)))
    }

    pub fn load_lld(
        &self,
        lld: Lld,
        partition: Partition,
        index: i64,
        verbose: bool,
    ) -> Result<Table> {
        let path = self.lld_path(lld, partition, index)?;
        let table = read_table(&path, lld.format())?;
        report_shape(verbose, lld.name(), &table);
        Ok(table)
    }

    pub fn baseline_path(
        &self,
        feature: BaselineFeature,
        partition: Partition,
        index: i64,
    ) -> Result<PathBuf> {
        let sample = partition.sample_name(index)?;
        Ok(feature
            .base_dir(&self.config)
            .join(feature.file_name(&sample)))
    }

    pub fn load_baseline_feature(
        &self,
        feature: BaselineFeature,
        partition: Partition,
        index: i64,
        verbose: bool,
    ) -> Result<Table> {
        let path = self.baseline_path(feature, partition, index)?;
        let table = read_table(&path, feature.format())?;
        report_shape(verbose, feature.name(), &table);
        Ok(table)
    }

    // -- MATLAB exports --

    pub fn load_matlab_baseline_feature(
        &self,
        feature: MatlabFeature,
        verbose: bool,
    ) -> Result<MatlabBaseline> {
        match feature.source(&self.config) {
            MatlabSource::Combined(path) => {
                let table = read_headerless(path)?;
                report_shape(verbose, feature.name(), &table);
                Ok(MatlabBaseline::Combined(table))
            }
            MatlabSource::Split(paths) => {
                let train = MatlabPartition {
                    data: read_headerless(&paths.train_data)?,
                    label: read_headerless(&paths.train_label)?,
                    inst: read_headerless(&paths.train_inst)?,
                };
                let test = MatlabPartition {
                    data: read_headerless(&paths.test_data)?,
                    label: read_headerless(&paths.test_label)?,
                    inst: read_headerless(&paths.test_inst)?,
                };
                if verbose {
                    for (side, part) in [("train", &train), ("test", &test)] {
                        report_shape(true, &format!("{feature} {side} data"), &part.data);
                        report_shape(true, &format!("{feature} {side} label"), &part.label);
                        report_shape(true, &format!("{feature} {side} inst"), &part.inst);
                    }
                }
                Ok(MatlabBaseline::Split { train, test })
            }
        }
    }
}

fn read_headerless(path: &Path) -> Result<Table> {
    read_table(path, TableFormat::HEADERLESS_COMMA)
}

fn report_shape(verbose: bool, what: &str, table: &Table) {
    if verbose {
        let (rows, cols) = table.shape();
        log::info!("{what}: ({rows}, {cols})");
    }
}
