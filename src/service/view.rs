use serde::Deserialize;

use crate::core::GlimpseError;
use crate::dataset::DatasetSource;
use crate::table::Table;

/// Everything a view request selects. Omitted sources fall back to the
/// configured default repo paths; an omitted multiplier falls back to the
/// configured default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ViewSelections {
    #[serde(default)]
    pub a: Option<DatasetSource>,
    #[serde(default)]
    pub b: Option<DatasetSource>,
    #[serde(default)]
    pub sketch_sql: Option<String>,
    #[serde(default)]
    pub scenario: Option<ScenarioSelection>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ScenarioSelection {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub multiplier: Option<f64>,
}

/// Result of composing a view: either guidance (one or both datasets
/// unavailable or empty) or the computed panels.
pub enum ViewOutcome {
    AwaitingDatasets { message: String },
    Ready(View),
}

pub struct View {
    pub translate: TranslatePanel,
    pub temporal: TemporalPanel,
    /// Present when the request selected a scenario; a failed computation
    /// is carried inline so the other panels still render.
    pub scenario: Option<Result<ScenarioPanel, GlimpseError>>,
}

/// Placeholder panel: echoes the sketch SQL and previews both datasets.
pub struct TranslatePanel {
    pub sketch_sql: String,
    pub a: Table,
    pub b: Table,
}

/// Placeholder panel: previews both datasets pending real timestamp
/// alignment semantics.
pub struct TemporalPanel {
    pub a: Table,
    pub b: Table,
}

#[derive(Debug)]
pub struct ScenarioPanel {
    pub multiplier: f64,
    pub numeric_columns: Vec<String>,
    pub total_rows: usize,
    pub preview: Table,
}
