pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{Json, Router, routing::get};
use doc::ApiDoc;
use routes::{assignment, classes, health, reference, registry};
use state::AppState;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

/// Builds the application router, serving its OpenAPI document at
/// `/api-docs/openapi.json`
pub fn app(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(reference::reference))
        .routes(routes!(classes::list_students, classes::create_class))
        .routes(routes!(
            assignment::fetch_for_assignment,
            assignment::assign_teachers
        ))
        .routes(routes!(registry::register_student))
        .routes(routes!(registry::register_teacher))
        .routes(routes!(registry::register_parent))
        .split_for_parts();

    router
        .route("/api-docs/openapi.json", get(move || async move { Json(api) }))
        .layer(CompressionLayer::new())
        .with_state(state)
}
