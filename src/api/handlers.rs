use std::sync::{Arc, LazyLock};

use axum::Json;
use axum::extract::State;

use crate::service::{GlimpseService, ViewSelections};

use super::convert::TablePreview;
use super::error::ApiError;
use super::types::{PreviewRequest, PreviewResponse, ViewResponse};

static OPENAPI_JSON: LazyLock<serde_json::Value> = LazyLock::new(|| {
    let yaml = include_str!("../../openapi.yaml");
    serde_yaml_ng::from_str(yaml).expect("openapi.yaml must be valid YAML")
});

pub async fn openapi() -> Json<serde_json::Value> {
    Json(OPENAPI_JSON.clone())
}

pub async fn health() -> &'static str {
    "OK"
}

/// Compute the full exploration view for the request's selections.
/// Unavailable datasets produce guidance, not an error status.
pub async fn view(
    State(service): State<Arc<GlimpseService>>,
    Json(selections): Json<ViewSelections>,
) -> Result<Json<ViewResponse>, ApiError> {
    let outcome = service.view(selections).await;
    let response = ViewResponse::try_from(outcome)?;
    Ok(Json(response))
}

/// Load a single dataset and return its head. Unlike `view`, load failures
/// surface here as HTTP errors.
pub async fn preview(
    State(service): State<Arc<GlimpseService>>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let table = service.load(&req.source).await?;
    let response = PreviewResponse {
        total_rows: table.num_rows(),
        numeric_columns: table.numeric_columns(),
        preview: TablePreview::try_from(&table.head(req.rows))?,
    };
    Ok(Json(response))
}
