use axum::body::Bytes;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use lipi_core::transliterate;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct TransliterateRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransliterateResponse {
    pub transliterated_text: String,
}

/// Transliterate the `text` field of a JSON request body.
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// that a malformed body surfaces as the internal-failure case (500), while
/// a well-formed body without usable text is an invalid request (400).
pub async fn transliterate_text(body: Bytes) -> Result<Json<TransliterateResponse>, ApiError> {
    let request: TransliterateRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Internal(format!("invalid request body: {e}")))?;

    if request.text.is_empty() {
        return Err(ApiError::InvalidRequest("text is required".into()));
    }

    debug!(input_len = request.text.len(), "transliterating request");
    let transliterated_text = transliterate(&request.text);

    Ok(Json(TransliterateResponse { transliterated_text }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
