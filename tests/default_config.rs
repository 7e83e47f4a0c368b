//! `DataConfig::load` resolves `config/data.json` against the working
//! directory. Kept in its own test binary because it changes that directory.

use std::fs;

use mania_data::{DataConfig, DataError};
use tempfile::TempDir;

#[test]
fn load_reads_descriptor_from_working_directory() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = TempDir::new().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    assert!(matches!(DataConfig::load(), Err(DataError::Io { .. })));

    let config = DataConfig::rooted_at(dir.path());
    fs::create_dir_all(dir.path().join("config")).unwrap();
    fs::write(
        dir.path().join("config").join("data.json"),
        serde_json::to_string_pretty(&config).unwrap(),
    )
    .unwrap();

    assert_eq!(DataConfig::load().unwrap(), config);
}
