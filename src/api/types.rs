use serde::{Deserialize, Serialize};

use crate::core::GlimpseError;
use crate::dataset::DatasetSource;
use crate::service::{ScenarioPanel, TemporalPanel, TranslatePanel, View, ViewOutcome};

use super::convert::TablePreview;

/// Request body for the dataset preview endpoint.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreviewRequest {
    pub source: DatasetSource,
    #[serde(default = "PreviewRequest::default_rows")]
    pub rows: usize,
}

impl PreviewRequest {
    fn default_rows() -> usize {
        20
    }
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub total_rows: usize,
    pub numeric_columns: Vec<String>,
    pub preview: TablePreview,
}

/// Response for the view endpoint. Until both datasets are present and
/// non-empty only `status` and `message` are populated.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panels: Option<Panels>,
}

#[derive(Debug, Serialize)]
pub struct Panels {
    pub translate: TranslatePanelJson,
    pub temporal: TemporalPanelJson,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<PanelOutcome<ScenarioPanelJson>>,
}

/// A panel either rendered or failed; failures stay inline so the rest of
/// the view is still served.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PanelOutcome<T> {
    Ok(T),
    Error { error: String },
}

#[derive(Debug, Serialize)]
pub struct TranslatePanelJson {
    pub sketch_sql: String,
    pub a: TablePreview,
    pub b: TablePreview,
}

#[derive(Debug, Serialize)]
pub struct TemporalPanelJson {
    pub a: TablePreview,
    pub b: TablePreview,
}

#[derive(Debug, Serialize)]
pub struct ScenarioPanelJson {
    pub multiplier: f64,
    pub numeric_columns: Vec<String>,
    pub total_rows: usize,
    pub preview: TablePreview,
}

/// Error response format.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl TryFrom<ViewOutcome> for ViewResponse {
    type Error = GlimpseError;

    fn try_from(outcome: ViewOutcome) -> Result<Self, GlimpseError> {
        match outcome {
            ViewOutcome::AwaitingDatasets { message } => Ok(ViewResponse {
                status: "awaiting_datasets".to_string(),
                message: Some(message),
                panels: None,
            }),
            ViewOutcome::Ready(view) => Ok(ViewResponse {
                status: "ready".to_string(),
                message: None,
                panels: Some(Panels::try_from(view)?),
            }),
        }
    }
}

impl TryFrom<View> for Panels {
    type Error = GlimpseError;

    fn try_from(view: View) -> Result<Self, GlimpseError> {
        let scenario = match view.scenario {
            None => None,
            Some(Ok(panel)) => Some(PanelOutcome::Ok(ScenarioPanelJson::try_from(panel)?)),
            Some(Err(e)) => Some(PanelOutcome::Error {
                error: e.to_string(),
            }),
        };
        Ok(Panels {
            translate: TranslatePanelJson::try_from(view.translate)?,
            temporal: TemporalPanelJson::try_from(view.temporal)?,
            scenario,
        })
    }
}

impl TryFrom<TranslatePanel> for TranslatePanelJson {
    type Error = GlimpseError;

    fn try_from(panel: TranslatePanel) -> Result<Self, GlimpseError> {
        Ok(TranslatePanelJson {
            sketch_sql: panel.sketch_sql,
            a: TablePreview::try_from(&panel.a)?,
            b: TablePreview::try_from(&panel.b)?,
        })
    }
}

impl TryFrom<TemporalPanel> for TemporalPanelJson {
    type Error = GlimpseError;

    fn try_from(panel: TemporalPanel) -> Result<Self, GlimpseError> {
        Ok(TemporalPanelJson {
            a: TablePreview::try_from(&panel.a)?,
            b: TablePreview::try_from(&panel.b)?,
        })
    }
}

impl TryFrom<ScenarioPanel> for ScenarioPanelJson {
    type Error = GlimpseError;

    fn try_from(panel: ScenarioPanel) -> Result<Self, GlimpseError> {
        Ok(ScenarioPanelJson {
            multiplier: panel.multiplier,
            numeric_columns: panel.numeric_columns,
            total_rows: panel.total_rows,
            preview: TablePreview::try_from(&panel.preview)?,
        })
    }
}
