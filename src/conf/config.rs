use config::Config as CConfig;
use serde::{Deserialize, Serialize};

use crate::conf::{DatasetsConfig, ScenarioConfig, ServerConfig};
use crate::core::GlimpseError::{self, ConfigParsingError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub datasets: DatasetsConfig,
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

impl Config {
    /// Layer an optional TOML file with GLIMPSE_-prefixed environment
    /// variables (e.g. GLIMPSE_SERVER__PORT=9000).
    pub fn load(path: Option<&str>) -> Result<Config, GlimpseError> {
        let mut builder = CConfig::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }
        builder
            .add_source(config::Environment::with_prefix("GLIMPSE").separator("__"))
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))
    }

    pub fn from_str(toml_str: &str) -> Result<Config, GlimpseError> {
        let config = CConfig::builder()
            .add_source(config::File::from_str(toml_str, config::FileFormat::Toml))
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        Ok(config)
    }
}
