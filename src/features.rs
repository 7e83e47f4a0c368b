//! Closed sets of feature names, each carrying where its files live and
//! how they are read.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::config::{DataConfig, MatlabSplitPaths};
use crate::data::loader::TableFormat;
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Low-level descriptors
// ---------------------------------------------------------------------------

/// Frame-level descriptor streams, one file per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lld {
    Mfcc,
    EGeMaps,
    OpenFace,
}

impl Lld {
    pub const ALL: [Lld; 3] = [Lld::Mfcc, Lld::EGeMaps, Lld::OpenFace];

    pub fn name(self) -> &'static str {
        match self {
            Lld::Mfcc => "MFCC",
            Lld::EGeMaps => "eGeMAPS",
            Lld::OpenFace => "openFace",
        }
    }

    /// openSMILE writes `;`-separated files, OpenFace `,`-separated ones.
    pub fn format(self) -> TableFormat {
        match self {
            Lld::Mfcc | Lld::EGeMaps => TableFormat::SEMICOLON,
            Lld::OpenFace => TableFormat::COMMA,
        }
    }

    pub fn base_dir(self, config: &DataConfig) -> &Path {
        let lld = &config.data_path_local.lld;
        match self {
            Lld::Mfcc => &lld.mfcc,
            Lld::EGeMaps => &lld.egemaps,
            Lld::OpenFace => &lld.openface,
        }
    }

    pub fn file_name(self, sample: &str) -> String {
        format!("{sample}.{}", self.format().extension())
    }
}

// ---------------------------------------------------------------------------
// Baseline features
// ---------------------------------------------------------------------------

/// Session-level baseline feature sets shipped with the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaselineFeature {
    BoAW,
    EGeMaps,
    Mfcc,
    DeepSpectrum,
    BoVW,
    Au,
}

impl BaselineFeature {
    pub const ALL: [BaselineFeature; 6] = [
        BaselineFeature::BoAW,
        BaselineFeature::EGeMaps,
        BaselineFeature::Mfcc,
        BaselineFeature::DeepSpectrum,
        BaselineFeature::BoVW,
        BaselineFeature::Au,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BaselineFeature::BoAW => "BoAW",
            BaselineFeature::EGeMaps => "eGeMAPS",
            BaselineFeature::Mfcc => "MFCC",
            BaselineFeature::DeepSpectrum => "DeepSpectrum",
            BaselineFeature::BoVW => "BoVW",
            BaselineFeature::Au => "AU",
        }
    }

    pub fn format(self) -> TableFormat {
        match self {
            BaselineFeature::EGeMaps => TableFormat::Arff,
            _ => TableFormat::SEMICOLON,
        }
    }

    /// Bag-of-words files carry the codebook size as a tag in front of the
    /// sample name.
    pub fn file_prefix(self) -> &'static str {
        match self {
            BaselineFeature::BoAW => "2_",
            BaselineFeature::BoVW => "11_",
            _ => "",
        }
    }

    pub fn base_dir(self, config: &DataConfig) -> &Path {
        let audio = &config.data_path_local.baseline.audio;
        let video = &config.data_path_local.baseline.video;
        match self {
            BaselineFeature::BoAW => &audio.boaw,
            BaselineFeature::EGeMaps => &audio.egemaps,
            BaselineFeature::Mfcc => &audio.mfcc,
            BaselineFeature::DeepSpectrum => &audio.deep_spectrum,
            BaselineFeature::BoVW => &video.bovw,
            BaselineFeature::Au => &video.au,
        }
    }

    pub fn file_name(self, sample: &str) -> String {
        format!(
            "{}{sample}.{}",
            self.file_prefix(),
            self.format().extension()
        )
    }
}

// ---------------------------------------------------------------------------
// MATLAB-exported baselines
// ---------------------------------------------------------------------------

/// Baselines exported by the MATLAB scripts as headerless tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatlabFeature {
    Au,
    BoW,
    Deep,
    EGeMaps,
    Mfcc,
}

/// Where a MATLAB baseline lives: one combined file or six split files.
#[derive(Debug, Clone, Copy)]
pub enum MatlabSource<'a> {
    Combined(&'a Path),
    Split(&'a MatlabSplitPaths),
}

impl MatlabFeature {
    pub const ALL: [MatlabFeature; 5] = [
        MatlabFeature::Au,
        MatlabFeature::BoW,
        MatlabFeature::Deep,
        MatlabFeature::EGeMaps,
        MatlabFeature::Mfcc,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MatlabFeature::Au => "AU",
            MatlabFeature::BoW => "BoW",
            MatlabFeature::Deep => "Deep",
            MatlabFeature::EGeMaps => "eGeMAPS",
            MatlabFeature::Mfcc => "MFCC",
        }
    }

    pub fn source(self, config: &DataConfig) -> MatlabSource<'_> {
        let matlab = &config.baseline_matlab;
        match self {
            MatlabFeature::Au => MatlabSource::Combined(&matlab.au),
            MatlabFeature::BoW => MatlabSource::Combined(&matlab.bow),
            MatlabFeature::EGeMaps => MatlabSource::Combined(&matlab.egemaps),
            MatlabFeature::Deep => MatlabSource::Split(&matlab.deep),
            MatlabFeature::Mfcc => MatlabSource::Split(&matlab.mfcc),
        }
    }
}

// ---------------------------------------------------------------------------
// Name parsing
// ---------------------------------------------------------------------------

macro_rules! named_feature {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = DataError;

            /// Accepts the dataset's own spelling, e.g. `eGeMAPS`.
            fn from_str(s: &str) -> Result<Self, DataError> {
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.name() == s)
                    .ok_or_else(|| DataError::UnknownFeature {
                        kind: $kind,
                        name: s.to_string(),
                    })
            }
        }
    };
}

named_feature!(Lld, "LLD");
named_feature!(BaselineFeature, "baseline feature");
named_feature!(MatlabFeature, "MATLAB baseline");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dataset_spelling() {
        assert_eq!("openFace".parse::<Lld>().unwrap(), Lld::OpenFace);
        assert_eq!("DeepSpectrum".parse::<BaselineFeature>().unwrap(), BaselineFeature::DeepSpectrum);
        assert_eq!("BoW".parse::<MatlabFeature>().unwrap(), MatlabFeature::BoW);
        for lld in Lld::ALL {
            assert_eq!(lld.to_string().parse::<Lld>().unwrap(), lld);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "BoVW".parse::<Lld>().unwrap_err();
        assert!(matches!(err, DataError::UnknownFeature { kind: "LLD", ref name } if name == "BoVW"));
        assert!("egemaps".parse::<BaselineFeature>().is_err());
        assert!("BoAW".parse::<MatlabFeature>().is_err());
    }

    #[test]
    fn lld_file_names_and_delimiters() {
        assert_eq!(Lld::Mfcc.file_name("train_005"), "train_005.csv");
        assert_eq!(
            Lld::OpenFace.format(),
            TableFormat::Delimited { delimiter: b',', header: true }
        );
        assert_eq!(
            Lld::EGeMaps.format(),
            TableFormat::Delimited { delimiter: b';', header: true }
        );
    }

    #[test]
    fn baseline_file_names_carry_tags_and_extensions() {
        assert_eq!(BaselineFeature::BoAW.file_name("dev_003"), "2_dev_003.csv");
        assert_eq!(BaselineFeature::BoVW.file_name("dev_003"), "11_dev_003.csv");
        assert_eq!(BaselineFeature::EGeMaps.file_name("test_010"), "test_010.arff");
        assert_eq!(BaselineFeature::Au.file_name("train_001"), "train_001.csv");
    }

    #[test]
    fn matlab_sources_match_their_shape() {
        let config = DataConfig::rooted_at(Path::new("/data"));
        for feature in MatlabFeature::ALL {
            let split = matches!(feature.source(&config), MatlabSource::Split(_));
            assert_eq!(split, matches!(feature, MatlabFeature::Deep | MatlabFeature::Mfcc));
        }
    }
}
