mod view;

use std::sync::Arc;

use log::warn;

use crate::conf::Config;
use crate::core::GlimpseError;
use crate::dataset::{DatasetCache, DatasetSource, load_csv_bytes};
use crate::scenario::scale;
use crate::table::Table;

pub use view::{
    ScenarioPanel, ScenarioSelection, TemporalPanel, TranslatePanel, View, ViewOutcome,
    ViewSelections,
};

const TRANSLATE_PREVIEW_ROWS: usize = 20;
const TEMPORAL_PREVIEW_ROWS: usize = 10;
const SCENARIO_PREVIEW_ROWS: usize = 20;

const DEFAULT_SKETCH_SQL: &str = "SELECT * FROM A LIMIT 20";
const GUIDANCE_MESSAGE: &str =
    "Provide both datasets (A and B), each as a repo path or an uploaded CSV.";

/// Computes the exploration view for one request. Stateless apart from the
/// TTL cache; every call recomputes the panels from its selections.
pub struct GlimpseService {
    config: Config,
    cache: DatasetCache,
}

impl GlimpseService {
    pub fn new(config: Config) -> Self {
        let cache = DatasetCache::new(config.datasets.root.clone(), config.datasets.cache_ttl);
        Self { config, cache }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load one dataset, surfacing load errors to the caller. This is the
    /// provider's direct contract; `view` wraps it with the soft
    /// "dataset unavailable" policy.
    pub async fn load(&self, source: &DatasetSource) -> Result<Arc<Table>, GlimpseError> {
        match source {
            DatasetSource::Upload(upload) => {
                // uploads are parsed fresh on every request, never cached
                Ok(Arc::new(load_csv_bytes(upload.content.as_bytes())?))
            }
            DatasetSource::Repo(repo) => self.cache.get_or_load(&repo.path).await,
        }
    }

    /// Compute the full view. Until both datasets are present and non-empty
    /// only guidance is returned; afterwards each panel computes
    /// independently, with scenario errors reported inside the panel.
    pub async fn view(&self, selections: ViewSelections) -> ViewOutcome {
        let a = self
            .resolve_slot("A", selections.a.as_ref(), &self.config.datasets.default_path_a)
            .await;
        let b = self
            .resolve_slot("B", selections.b.as_ref(), &self.config.datasets.default_path_b)
            .await;

        let (a, b) = match (a, b) {
            (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => (a, b),
            _ => {
                return ViewOutcome::AwaitingDatasets {
                    message: GUIDANCE_MESSAGE.to_string(),
                };
            }
        };

        let sketch_sql = selections
            .sketch_sql
            .unwrap_or_else(|| DEFAULT_SKETCH_SQL.to_string());

        let translate = TranslatePanel {
            sketch_sql,
            a: a.head(TRANSLATE_PREVIEW_ROWS),
            b: b.head(TRANSLATE_PREVIEW_ROWS),
        };
        let temporal = TemporalPanel {
            a: a.head(TEMPORAL_PREVIEW_ROWS),
            b: b.head(TEMPORAL_PREVIEW_ROWS),
        };
        let scenario = selections
            .scenario
            .map(|selection| self.scenario_panel(&a, selection));

        ViewOutcome::Ready(View {
            translate,
            temporal,
            scenario,
        })
    }

    fn scenario_panel(
        &self,
        a: &Table,
        selection: ScenarioSelection,
    ) -> Result<ScenarioPanel, GlimpseError> {
        let bounds = &self.config.scenario;
        let multiplier = selection
            .multiplier
            .unwrap_or(bounds.multiplier_default);
        if !bounds.in_bounds(multiplier) {
            return Err(GlimpseError::InvalidSelection(format!(
                "multiplier {multiplier} outside [{}, {}]",
                bounds.multiplier_min, bounds.multiplier_max
            )));
        }

        let columns: Vec<&str> = selection.columns.iter().map(|s| s.as_str()).collect();
        let scaled = scale(a, &columns, multiplier)?;

        Ok(ScenarioPanel {
            multiplier,
            numeric_columns: a.numeric_columns(),
            total_rows: scaled.num_rows(),
            preview: scaled.head(SCENARIO_PREVIEW_ROWS),
        })
    }

    async fn resolve_slot(
        &self,
        slot: &str,
        source: Option<&DatasetSource>,
        default_path: &str,
    ) -> Option<Arc<Table>> {
        let fallback;
        let source = match source {
            Some(source) => source,
            None => {
                fallback = DatasetSource::repo(default_path);
                &fallback
            }
        };
        match self.load(source).await {
            Ok(table) => Some(table),
            Err(e) => {
                warn!("dataset {slot} unavailable: {e}");
                None
            }
        }
    }
}
