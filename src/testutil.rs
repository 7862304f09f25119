//! Test fixtures shared between unit and integration tests.
//!
//! This module is only available when the `testutil` feature is enabled.

use std::path::Path;

use tempfile::TempDir;

use crate::conf::{Config, DatasetsConfig};

pub const SAMPLE_A_CSV: &str = "\
region,month,revenue,units
north,2024-01-01,100,10
south,2024-01-01,200,5
east,2024-02-01,300,8
";

pub const SAMPLE_B_CSV: &str = "\
region,month,cost
north,2024-01-01,40
south,2024-02-01,90
";

/// Write the default sample datasets under `root/data/`.
pub fn seed_sample_data(root: &Path) {
    let data_dir = root.join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("sample_a.csv"), SAMPLE_A_CSV).unwrap();
    std::fs::write(data_dir.join("sample_b.csv"), SAMPLE_B_CSV).unwrap();
}

/// A temp workspace seeded with the sample datasets, plus a config whose
/// data root points at it.
pub fn workspace_with_samples() -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    seed_sample_data(dir.path());
    let config = Config {
        datasets: DatasetsConfig {
            root: dir.path().to_path_buf(),
            ..DatasetsConfig::default()
        },
        ..Config::default()
    };
    (dir, config)
}
