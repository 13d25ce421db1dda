//! TCGA Insight
//!
//! Look up one of the 33 TCGA cancer projects and get its names, a GDC
//! portal link and a generated overview of the disease.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

rust_i18n::i18n!("locales", fallback = "zh");

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

use services::QueryService;

/// Shared state handed to every handler
pub struct AppState {
    pub query_service: QueryService,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::project::list_projects,
        handlers::project::get_project,
        handlers::query::query,
        handlers::query::list_examples,
        handlers::web::health,
    ),
    components(schemas(
        models::ProjectResponse,
        models::QueryRequest,
        models::QueryResult,
        models::Language,
        handlers::web::HealthResponse,
    )),
    tags(
        (name = "Projects", description = "TCGA project reference table"),
        (name = "Query", description = "Summary and generated overview of a project"),
        (name = "System", description = "Service status"),
    )
)]
pub struct ApiDoc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::web::index))
        .route("/api/health", get(handlers::web::health))
        .route("/api/projects", get(handlers::project::list_projects))
        .route("/api/projects/:code", get(handlers::project::get_project))
        .route("/api/examples", get(handlers::query::list_examples))
        .route("/api/query", post(handlers::query::query))
        .with_state(state)
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(axum_middleware::from_fn(middleware::locale_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
