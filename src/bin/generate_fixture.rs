//! Writes a small synthetic copy of the corpus layout plus a matching
//! `config/data.json`, so the loaders can be exercised without the real data.
//!
//! Usage: `generate_fixture [OUTPUT_DIR]` (defaults to `fixture/`).

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mania_data::{BaselineFeature, DataConfig, Dataset, Lld, MatlabFeature, Partition};

/// Sessions written per partition; indices 1..=SESSIONS.
const SESSIONS: i64 = 3;
const FRAMES: usize = 20;
const DIMS: usize = 8;

/// Seeded splitmix64 stream, so repeated runs write identical files.
struct FixtureRng(u64);

impl FixtureRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[-1, 1)`, the range the feature columns are drawn from.
    fn feature(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

fn write(path: &Path, body: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))
}

/// `rows` lines of `cols` random values joined by `sep`, each prefixed by `lead`.
fn random_rows(rng: &mut FixtureRng, rows: usize, cols: usize, sep: char, lead: &str) -> String {
    let mut out = String::new();
    for frame in 0..rows {
        out.push_str(lead);
        if !lead.is_empty() {
            let _ = write!(out, "{sep}{:.2}", frame as f64 * 0.01);
        }
        for c in 0..cols {
            if c > 0 || !lead.is_empty() {
                out.push(sep);
            }
            let _ = write!(out, "{:.6}", rng.feature());
        }
        out.push('\n');
    }
    out
}

fn header(sep: char, prefix: &str, cols: usize, lead: &[&str]) -> String {
    let mut names: Vec<String> = lead.iter().map(|s| s.to_string()).collect();
    names.extend((0..cols).map(|i| format!("{prefix}[{i}]")));
    names.join(&sep.to_string()) + "\n"
}

fn write_labels(dataset: &Dataset, rng: &mut FixtureRng) -> Result<()> {
    let mut body = String::from("SubjectID,Partition,Instance_name,Age,Total_YMRS,ManiaLevel\n");
    let mut row = 0;
    for partition in [Partition::Dev, Partition::Train] {
        for index in 1..=SESSIONS {
            let subject = format!("{}{:02}", if row % 2 == 0 { 'M' } else { 'F' }, row / 2 + 1);
            let ymrs = rng.below(40);
            let level = match ymrs {
                0..=7 => 1,
                8..=19 => 2,
                _ => 3,
            };
            let _ = writeln!(
                body,
                "{subject},{partition},{},{},{ymrs},{level}",
                partition.sample_name(index)?,
                20 + rng.below(45),
            );
            row += 1;
        }
    }
    write(&dataset.label_path(), &body)
}

fn write_sessions(dataset: &Dataset, rng: &mut FixtureRng) -> Result<()> {
    for partition in Partition::ALL {
        for index in 1..=SESSIONS {
            let sample = partition.sample_name(index)?;

            for lld in Lld::ALL {
                let path = dataset.lld_path(lld, partition, index)?;
                let body = match lld {
                    Lld::OpenFace => {
                        header(',', "AU", DIMS, &["frame", "timestamp"])
                            + &random_rows(rng, FRAMES, DIMS, ',', &index.to_string())
                    }
                    _ => {
                        header(';', lld.name(), DIMS, &["name", "frameTime"])
                            + &random_rows(rng, FRAMES, DIMS, ';', "'unknown'")
                    }
                };
                write(&path, &body)?;
            }

            for feature in BaselineFeature::ALL {
                let path = dataset.baseline_path(feature, partition, index)?;
                let body = match feature {
                    BaselineFeature::EGeMaps => arff_functionals(rng, &sample),
                    _ => {
                        header(';', feature.name(), DIMS, &["name", "frameTime"])
                            + &random_rows(rng, FRAMES / 4, DIMS, ';', "'unknown'")
                    }
                };
                write(&path, &body)?;
            }
        }
    }
    Ok(())
}

fn arff_functionals(rng: &mut FixtureRng, sample: &str) -> String {
    let mut out = String::from("@relation 'openSMILE_features'\n\n@attribute name string\n");
    for i in 0..DIMS {
        let _ = writeln!(out, "@attribute eGeMAPS_{i} numeric");
    }
    out.push_str("@attribute class numeric\n\n@data\n\n");
    let _ = write!(out, "'{sample}'");
    for _ in 0..DIMS {
        let _ = write!(out, ",{:.6}", rng.feature().abs());
    }
    out.push_str(",?\n");
    out
}

fn write_matlab(dataset: &Dataset, rng: &mut FixtureRng) -> Result<()> {
    let sessions = (SESSIONS * 2) as usize;

    let matlab = &dataset.config().baseline_matlab;
    for path in [&matlab.au, &matlab.bow, &matlab.egemaps] {
        write(path, &random_rows(rng, sessions, DIMS, ',', ""))?;
    }
    for feature in MatlabFeature::ALL {
        let paths = match feature {
            MatlabFeature::Deep => &matlab.deep,
            MatlabFeature::Mfcc => &matlab.mfcc,
            _ => continue,
        };
        for (data, label, inst) in [
            (&paths.train_data, &paths.train_label, &paths.train_inst),
            (&paths.test_data, &paths.test_label, &paths.test_inst),
        ] {
            write(data, &random_rows(rng, sessions, DIMS, ',', ""))?;
            let labels: String = (0..sessions).map(|_| format!("{}\n", rng.below(3) + 1)).collect();
            write(label, &labels)?;
            let insts: String = (1..=sessions).map(|i| format!("{i}\n")).collect();
            write(inst, &insts)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let root = std::env::args().nth(1).unwrap_or_else(|| "fixture".to_string());
    let root = Path::new(&root);
    fs::create_dir_all(root).with_context(|| format!("creating {}", root.display()))?;
    let root = root
        .canonicalize()
        .with_context(|| format!("resolving {}", root.display()))?;

    let config = DataConfig::rooted_at(&root);
    let config_path = root.join("config").join("data.json");
    let json = serde_json::to_string_pretty(&config).context("serialising configuration")?;
    write(&config_path, &json)?;

    let dataset = Dataset::new(config);
    let mut rng = FixtureRng(42);
    write_labels(&dataset, &mut rng)?;
    write_sessions(&dataset, &mut rng)?;
    write_matlab(&dataset, &mut rng)?;

    // Read everything back once so a broken fixture fails here.
    let summary = dataset.label_summary().context("re-reading labels")?;
    let sample = dataset
        .load_baseline_feature(BaselineFeature::EGeMaps, Partition::Test, 1, true)
        .context("re-reading eGeMAPS functionals")?;
    log::info!(
        "{} subjects, eGeMAPS functionals shape {:?}",
        summary.subject_count(),
        sample.shape()
    );

    println!("Wrote fixture dataset to {}", root.display());
    println!("Configuration: {}", config_path.display());
    Ok(())
}
