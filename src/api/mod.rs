mod convert;
mod error;
mod handlers;
mod types;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::core::GlimpseError;
use crate::service::GlimpseService;

pub use convert::{ColumnData, TablePreview};
pub use types::{
    PanelOutcome, Panels, PreviewRequest, PreviewResponse, ScenarioPanelJson, TemporalPanelJson,
    TranslatePanelJson, ViewResponse,
};

pub struct GlimpseApi {
    service: Arc<GlimpseService>,
}

impl GlimpseApi {
    pub fn new(service: GlimpseService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/openapi.json", get(handlers::openapi))
            .route("/health", get(handlers::health))
            .route("/api/v1/view", post(handlers::view))
            .route("/api/v1/dataset/preview", post(handlers::preview))
            .with_state(self.service.clone())
    }

    pub async fn serve(self, addr: &str) -> Result<(), GlimpseError> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GlimpseError::IoError(format!("binding to {addr}: {e}")))?;
        axum::serve(listener, self.router())
            .await
            .map_err(|e| GlimpseError::IoError(format!("serving: {e}")))?;
        Ok(())
    }
}
