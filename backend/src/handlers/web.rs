use axum::{Json, response::Html};
use rust_embed::RustEmbed;
use serde::Serialize;
use utoipa::ToSchema;

use crate::utils::{ApiError, ApiResult};

#[derive(RustEmbed)]
#[folder = "web/"]
struct WebAssets;

/// The query form
pub async fn index() -> ApiResult<Html<String>> {
    let page = WebAssets::get("index.html")
        .ok_or_else(|| ApiError::internal_error("index.html is not embedded"))?;
    Ok(Html(String::from_utf8_lossy(&page.data).into_owned()))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "System"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
