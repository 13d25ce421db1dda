use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use crate::AppState;
use crate::models::{QueryRequest, QueryResult};
use crate::services::query_service::EXAMPLES;
use crate::utils::{ApiError, ApiResult};

/// Query a project: static summary plus generated narrative
///
/// A failed generation still answers 200, with `narrative` set to "Response Error".
/// A body that does not deserialize (unknown language, missing code) is a 400.
#[utoipa::path(
    post,
    path = "/api/query",
    request_body = QueryRequest,
    responses(
        (status = 200, description = "Summary and narrative", body = QueryResult),
        (status = 400, description = "Malformed request body"),
        (status = 404, description = "Project not found")
    ),
    tag = "Query"
)]
pub async fn query(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QueryRequest>, JsonRejection>,
) -> ApiResult<Json<QueryResult>> {
    let Json(req) = body.map_err(|rejection| ApiError::invalid_input(rejection.body_text()))?;
    let result = state.query_service.query(&req.code, req.language).await?;
    Ok(Json(result))
}

/// Example queries offered by the form
#[utoipa::path(
    get,
    path = "/api/examples",
    responses(
        (status = 200, description = "Preset queries", body = Vec<QueryRequest>)
    ),
    tag = "Query"
)]
pub async fn list_examples() -> Json<Vec<QueryRequest>> {
    Json(
        EXAMPLES
            .iter()
            .map(|(code, language)| QueryRequest { code: code.to_string(), language: *language })
            .collect(),
    )
}
