use super::types::GenerateRequest;
use crate::{
    Error, Result,
    extraction::{ExtractionRequest, Extractor},
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::Method,
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<Extractor>,
}

pub async fn generate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let request_id = Uuid::new_v4();
    let span = info_span!("generate", %request_id);

    async move {
        // A body that is not a JSON object carries no usable input.
        let request = match payload {
            Ok(Json(request)) => request,
            Err(rejection) => {
                warn!("Rejected request body: {}", rejection.body_text());
                GenerateRequest::default()
            }
        };

        let doc_type = request.doc_type();
        info!(
            "Received generate request with type {:?}",
            doc_type.as_deref().unwrap_or("invoice")
        );

        let result = state
            .extractor
            .extract(ExtractionRequest {
                input: request.input,
                doc_type,
            })
            .await;

        match result {
            Ok(value) => {
                info!("Extraction succeeded");
                Ok(Json(value))
            }
            Err(e @ (Error::BadRequest(_) | Error::Config(_))) => {
                warn!("Rejected generate request: {}", e);
                Err(e)
            }
            Err(e) => {
                error!("Extraction failed: {}", e);
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}

pub async fn method_not_allowed(method: Method) -> Error {
    warn!("Rejected {} request to generate endpoint", method);
    Error::MethodNotAllowed
}
