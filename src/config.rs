//! Typed view of the dataset path descriptor (`config/data.json`).
//!
//! Field names follow the descriptor's own keys, which mix cases
//! (`LLD`, `eGeMAPS`, `openFace`, ...), hence the explicit renames.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// Location of the descriptor relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/data.json";

/// The whole descriptor. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    pub data_path_local: LocalPaths,
    #[serde(rename = "baseline_MATLAB")]
    pub baseline_matlab: MatlabPaths,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalPaths {
    /// Directory holding `labels_metadata.csv`.
    pub label_metadata: PathBuf,
    #[serde(rename = "LLD")]
    pub lld: LldPaths,
    pub baseline: BaselinePaths,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LldPaths {
    #[serde(rename = "MFCC")]
    pub mfcc: PathBuf,
    #[serde(rename = "eGeMAPS")]
    pub egemaps: PathBuf,
    #[serde(rename = "openFace")]
    pub openface: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselinePaths {
    pub audio: AudioBaselinePaths,
    pub video: VideoBaselinePaths,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioBaselinePaths {
    #[serde(rename = "BoAW")]
    pub boaw: PathBuf,
    #[serde(rename = "eGeMAPS")]
    pub egemaps: PathBuf,
    #[serde(rename = "MFCC")]
    pub mfcc: PathBuf,
    #[serde(rename = "DeepSpectrum")]
    pub deep_spectrum: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoBaselinePaths {
    #[serde(rename = "BoVW")]
    pub bovw: PathBuf,
    #[serde(rename = "AU")]
    pub au: PathBuf,
}

/// Files exported from the MATLAB baseline scripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatlabPaths {
    #[serde(rename = "AU")]
    pub au: PathBuf,
    #[serde(rename = "BoW")]
    pub bow: PathBuf,
    #[serde(rename = "eGeMAPS")]
    pub egemaps: PathBuf,
    #[serde(rename = "Deep")]
    pub deep: MatlabSplitPaths,
    #[serde(rename = "MFCC")]
    pub mfcc: MatlabSplitPaths,
}

/// Six files of a baseline exported with a separate train/test split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatlabSplitPaths {
    pub train_data: PathBuf,
    pub train_label: PathBuf,
    pub train_inst: PathBuf,
    pub test_data: PathBuf,
    pub test_label: PathBuf,
    pub test_inst: PathBuf,
}

impl DataConfig {
    /// Read [`DEFAULT_CONFIG_PATH`].
    pub fn load() -> Result<Self> {
        Self::from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: DataConfig = serde_json::from_str(&text).map_err(|source| DataError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded dataset configuration from {}", path.display());
        Ok(config)
    }

    /// Parse a descriptor held in memory; errors report `<inline>` as the path.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| DataError::Config {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Descriptor with every path placed under `root` in the layout the
    /// fixture generator writes.
    pub fn rooted_at(root: &Path) -> Self {
        let split = |name: &str| {
            let dir = root.join("baseline_MATLAB").join(name);
            MatlabSplitPaths {
                train_data: dir.join("train_data.csv"),
                train_label: dir.join("train_label.csv"),
                train_inst: dir.join("train_inst.csv"),
                test_data: dir.join("test_data.csv"),
                test_label: dir.join("test_label.csv"),
                test_inst: dir.join("test_inst.csv"),
            }
        };
        let matlab = root.join("baseline_MATLAB");

        DataConfig {
            data_path_local: LocalPaths {
                label_metadata: root.join("labels"),
                lld: LldPaths {
                    mfcc: root.join("LLDs_audio_opensmile_MFCCs"),
                    egemaps: root.join("LLDs_audio_eGeMAPS"),
                    openface: root.join("LLDs_video_openFace_AUs"),
                },
                baseline: BaselinePaths {
                    audio: AudioBaselinePaths {
                        boaw: root.join("baseline_features").join("BoAW"),
                        egemaps: root.join("baseline_features").join("eGeMAPS"),
                        mfcc: root.join("baseline_features").join("MFCC"),
                        deep_spectrum: root.join("baseline_features").join("DeepSpectrum"),
                    },
                    video: VideoBaselinePaths {
                        bovw: root.join("baseline_features").join("BoVW"),
                        au: root.join("baseline_features").join("AU"),
                    },
                },
            },
            baseline_matlab: MatlabPaths {
                au: matlab.join("AU.csv"),
                bow: matlab.join("BoW.csv"),
                egemaps: matlab.join("eGeMAPS.csv"),
                deep: split("Deep"),
                mfcc: split("MFCC"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: &str = r#"{
        "data_path_local": {
            "label_metadata": "/data/labels/",
            "LLD": {
                "MFCC": "/data/LLD/MFCC/",
                "eGeMAPS": "/data/LLD/eGeMAPS/",
                "openFace": "/data/LLD/openFace/"
            },
            "baseline": {
                "audio": {
                    "BoAW": "/data/baseline/BoAW/",
                    "eGeMAPS": "/data/baseline/eGeMAPS/",
                    "MFCC": "/data/baseline/MFCC/",
                    "DeepSpectrum": "/data/baseline/Deep/"
                },
                "video": {
                    "BoVW": "/data/baseline/BoVW/",
                    "AU": "/data/baseline/AU/"
                }
            }
        },
        "baseline_MATLAB": {
            "AU": "/m/AU.csv",
            "BoW": "/m/BoW.csv",
            "eGeMAPS": "/m/eGeMAPS.csv",
            "Deep": {
                "train_data": "/m/deep/a", "train_label": "/m/deep/b", "train_inst": "/m/deep/c",
                "test_data": "/m/deep/d", "test_label": "/m/deep/e", "test_inst": "/m/deep/f"
            },
            "MFCC": {
                "train_data": "/m/mfcc/a", "train_label": "/m/mfcc/b", "train_inst": "/m/mfcc/c",
                "test_data": "/m/mfcc/d", "test_label": "/m/mfcc/e", "test_inst": "/m/mfcc/f"
            }
        }
    }"#;

    #[test]
    fn parses_mixed_case_keys() {
        let config = DataConfig::from_json_str(DESCRIPTOR).unwrap();
        assert_eq!(config.data_path_local.lld.openface, PathBuf::from("/data/LLD/openFace/"));
        assert_eq!(
            config.data_path_local.baseline.audio.deep_spectrum,
            PathBuf::from("/data/baseline/Deep/")
        );
        assert_eq!(config.baseline_matlab.bow, PathBuf::from("/m/BoW.csv"));
        assert_eq!(config.baseline_matlab.mfcc.test_inst, PathBuf::from("/m/mfcc/f"));
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let broken = DESCRIPTOR.replace("\"openFace\"", "\"OpenFace\"");
        assert!(matches!(
            DataConfig::from_json_str(&broken),
            Err(DataError::Config { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DataConfig::from_path(Path::new("/definitely/not/here/data.json")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn rooted_layout_survives_a_json_round_trip() {
        let config = DataConfig::rooted_at(Path::new("/tmp/fixture"));
        let text = serde_json::to_string_pretty(&config).unwrap();
        assert!(text.contains("\"baseline_MATLAB\""));
        assert_eq!(DataConfig::from_json_str(&text).unwrap(), config);
    }
}
