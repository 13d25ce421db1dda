use axum::{
    Json,
    extract::Path,
};

use crate::models::ProjectResponse;
use crate::services::reference_table;
use crate::utils::ApiResult;

/// List all TCGA projects
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "All 33 TCGA projects in selector order", body = Vec<ProjectResponse>)
    ),
    tag = "Projects"
)]
pub async fn list_projects() -> Json<Vec<ProjectResponse>> {
    Json(reference_table::all().iter().map(ProjectResponse::from).collect())
}

/// Get a single TCGA project
#[utoipa::path(
    get,
    path = "/api/projects/{code}",
    params(("code" = String, Path, description = "TCGA project code, e.g. TCGA-READ")),
    responses(
        (status = 200, description = "Project names and GDC link", body = ProjectResponse),
        (status = 404, description = "Project not found")
    ),
    tag = "Projects"
)]
pub async fn get_project(Path(code): Path<String>) -> ApiResult<Json<ProjectResponse>> {
    let entry = reference_table::lookup(&code)?;
    Ok(Json(ProjectResponse::from(entry)))
}
