use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;

/// Search request
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// The caller's draft application text. Optional at the wire level so a
    /// missing field produces the contract's 400 rather than a decode error.
    #[serde(default)]
    pub user_application: Option<String>,
}

/// Single search result
#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub application_text: String,
    pub similarity: f32,
}

/// Find the stored example applications most similar to the caller's draft.
///
/// The draft is embedded, every corpus record is scored by dot product
/// against the query vector, and the best `top_k` hits come back as a bare
/// JSON array sorted by descending similarity.
///
/// # Errors
///
/// - `400` when the body is not valid JSON, or `user_application` is
///   missing or blank
/// - `500` when the embedding provider or the corpus store fails; the
///   response body carries a generic message, details go to the log
pub async fn search_examples(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(detail = %rejection.body_text(), "rejected request body");
        ServerError::BadRequest("request body must be valid JSON".to_string())
    })?;

    let text = request
        .user_application
        .as_deref()
        .map(str::trim)
        .unwrap_or("");
    if text.is_empty() {
        return Err(ServerError::BadRequest(
            "user_application is required".to_string(),
        ));
    }

    let ranking = state.service.search(text).await?;

    let hits: Vec<SearchHit> = ranking
        .hits
        .into_iter()
        .map(|hit| SearchHit {
            id: hit.id,
            application_text: hit.text,
            similarity: hit.similarity,
        })
        .collect();

    Ok(Json(hits))
}
