use crate::Error;
use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/generate`. Both fields are optional at this layer so
/// that a missing `input` is reported as a 400 by the extractor. `type` is
/// left untyped so a non-string value cannot reject the whole body.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default, rename = "type")]
    pub doc_type: Option<Value>,
}

impl GenerateRequest {
    /// `type` as text; non-string values keep their JSON rendering so they
    /// resolve through the unknown-type fallback.
    pub fn doc_type(&self) -> Option<String> {
        match self.doc_type.as_ref()? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
