use std::sync::Arc;

use axum::{
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::material_cost::MaterialCostService;

use crate::{material_costs, openapi::ApiDoc};

pub const RESOURCE_PATH: &str = "/costo-materia";

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn MaterialCostService>,
}

impl AppState {
    pub fn new(service: Arc<dyn MaterialCostService>) -> Self { Self { service } }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, docs and the material cost resource.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let resource = Router::new()
        .route(RESOURCE_PATH, get(material_costs::list).post(material_costs::create))
        .route(
            &format!("{RESOURCE_PATH}/:id"),
            put(material_costs::update).delete(material_costs::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(resource)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
