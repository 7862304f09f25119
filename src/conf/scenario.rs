use serde::{Deserialize, Serialize};

/// Bounds for the scenario multiplier. Requests outside [min, max] are
/// rejected before the transform runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default = "ScenarioConfig::default_multiplier_min")]
    pub multiplier_min: f64,
    #[serde(default = "ScenarioConfig::default_multiplier_max")]
    pub multiplier_max: f64,
    #[serde(default = "ScenarioConfig::default_multiplier")]
    pub multiplier_default: f64,
}

impl ScenarioConfig {
    fn default_multiplier_min() -> f64 {
        0.5
    }

    fn default_multiplier_max() -> f64 {
        1.5
    }

    fn default_multiplier() -> f64 {
        1.1
    }

    pub fn in_bounds(&self, multiplier: f64) -> bool {
        multiplier >= self.multiplier_min && multiplier <= self.multiplier_max
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            multiplier_min: Self::default_multiplier_min(),
            multiplier_max: Self::default_multiplier_max(),
            multiplier_default: Self::default_multiplier(),
        }
    }
}
