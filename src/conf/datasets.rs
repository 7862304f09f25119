use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the two dataset slots read from, and how long repo-path loads
/// may be served from cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatasetsConfig {
    /// Root directory that repo-relative paths are resolved against.
    #[serde(default = "DatasetsConfig::default_root")]
    pub root: PathBuf,
    #[serde(default = "DatasetsConfig::default_path_a")]
    pub default_path_a: String,
    #[serde(default = "DatasetsConfig::default_path_b")]
    pub default_path_b: String,
    #[serde(with = "humantime_serde", default = "DatasetsConfig::default_cache_ttl")]
    pub cache_ttl: Duration,
}

impl DatasetsConfig {
    fn default_root() -> PathBuf {
        PathBuf::from(".")
    }

    fn default_path_a() -> String {
        String::from("data/sample_a.csv")
    }

    fn default_path_b() -> String {
        String::from("data/sample_b.csv")
    }

    fn default_cache_ttl() -> Duration {
        Duration::from_secs(300)
    }
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            default_path_a: Self::default_path_a(),
            default_path_b: Self::default_path_b(),
            cache_ttl: Self::default_cache_ttl(),
        }
    }
}
