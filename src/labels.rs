//! Subject labels: YMRS scores, mania levels and cohort statistics.

use std::collections::{BTreeMap, BTreeSet};

use crate::data::model::{Table, Value};
use crate::error::{DataError, Result};

/// File name of the label table inside the `label_metadata` directory.
pub const LABEL_FILE: &str = "labels_metadata.csv";

/// Rows before this index form the dev split, the rest the train split.
pub const DEV_ROWS: usize = 60;

pub const SUBJECT_COLUMN: &str = "SubjectID";
pub const AGE_COLUMN: &str = "Age";

const ID_INDEX: usize = 0;
const YMRS_INDEX: usize = 4;
const LEVEL_INDEX: usize = 5;

// ---------------------------------------------------------------------------
// Label projections
// ---------------------------------------------------------------------------

/// Label projections split positionally at [`DEV_ROWS`].
///
/// The split follows row order in the file; a subject may straddle it.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedLabels {
    pub ymrs_train: Table,
    pub ymrs_dev: Table,
    pub level_dev: Table,
    pub level_train: Table,
}

impl PartitionedLabels {
    /// The four slices as `(ymrs_train, ymrs_dev, level_dev, level_train)`.
    pub fn into_tuple(self) -> (Table, Table, Table, Table) {
        (self.ymrs_train, self.ymrs_dev, self.level_dev, self.level_train)
    }
}

/// Result of loading the label table.
#[derive(Debug, Clone, PartialEq)]
pub enum Labels {
    Partitioned(PartitionedLabels),
    /// Unsplit `(id, YMRS)` and `(id, mania level)` projections.
    Whole { ymrs: Table, level: Table },
}

/// Project the label table and optionally split it into dev/train.
pub fn split_labels(table: &Table, partition: bool) -> Result<Labels> {
    let ymrs = table.select(&[ID_INDEX, YMRS_INDEX])?;
    let level = table.select(&[ID_INDEX, LEVEL_INDEX])?;

    if !partition {
        return Ok(Labels::Whole { ymrs, level });
    }

    Ok(Labels::Partitioned(PartitionedLabels {
        ymrs_train: ymrs.slice(DEV_ROWS..),
        ymrs_dev: ymrs.slice(..DEV_ROWS),
        level_dev: level.slice(..DEV_ROWS),
        level_train: level.slice(DEV_ROWS..),
    }))
}

// ---------------------------------------------------------------------------
// Cohort summary
// ---------------------------------------------------------------------------

/// Statistics printed by verbose label loading.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSummary {
    /// Number of rows per distinct subject.
    pub instances_per_subject: BTreeMap<String, usize>,
    /// Distinct subjects whose id starts with `M`.
    pub male_subjects: usize,
    /// Distinct subjects whose id starts with `F`.
    pub female_subjects: usize,
    pub age_min: Option<f64>,
    pub age_max: Option<f64>,
    pub age_median: Option<f64>,
}

impl LabelSummary {
    pub fn from_table(table: &Table) -> Result<Self> {
        let subject_index = table
            .column_index(SUBJECT_COLUMN)
            .ok_or_else(|| DataError::MissingColumn(SUBJECT_COLUMN.to_string()))?;

        let mut instances_per_subject: BTreeMap<String, usize> = BTreeMap::new();
        for id in table.column(subject_index) {
            *instances_per_subject.entry(id.to_string()).or_default() += 1;
        }

        let sexes: Vec<char> = table
            .unique_values(subject_index)
            .iter()
            .filter_map(|id| id.to_string().chars().next())
            .collect();
        let male_subjects = sexes.iter().filter(|&&c| c == 'M').count();
        let female_subjects = sexes.iter().filter(|&&c| c == 'F').count();

        let ages: Vec<f64> = table
            .column_by_name(AGE_COLUMN)?
            .filter_map(Value::as_f64)
            .collect();

        Ok(LabelSummary {
            instances_per_subject,
            male_subjects,
            female_subjects,
            age_min: ages.iter().copied().reduce(f64::min),
            age_max: ages.iter().copied().reduce(f64::max),
            age_median: median(&ages),
        })
    }

    pub fn subject_count(&self) -> usize {
        self.instances_per_subject.len()
    }

    pub fn subjects(&self) -> BTreeSet<&str> {
        self.instances_per_subject.keys().map(String::as_str).collect()
    }

    pub fn log(&self) {
        for (subject, count) in &self.instances_per_subject {
            log::info!("{subject} subject has {count} instances");
        }
        log::info!("All subjects: {}", self.subject_count());
        log::info!("Male subjects: {}", self.male_subjects);
        log::info!("Female subjects: {}", self.female_subjects);
        match (self.age_min, self.age_max, self.age_median) {
            (Some(min), Some(max), Some(median)) => {
                log::info!("Age range ({min}, {max}), age median {median}")
            }
            _ => log::info!("No ages recorded"),
        }
    }
}

/// Median of a sequence; the mean of the two middle values for even lengths.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
