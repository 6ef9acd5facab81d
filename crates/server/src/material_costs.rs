//! `costo-materia` resource handlers.
//!
//! Each handler calls exactly one service operation; failures go through [`ApiError`].

use axum::{extract::{Path, State}, http::StatusCode, Json};
use models::material_cost::{MaterialCostPayload, Model};
use tracing::{debug, info};

use crate::{errors::ApiError, routes::AppState};

/// Path and body ids must agree; a body without an id takes the path id.
pub fn reconcile_id(path_id: i64, mut payload: MaterialCostPayload) -> Result<MaterialCostPayload, ApiError> {
    match payload.id {
        Some(body_id) if body_id != path_id => Err(ApiError::BadRequest(format!(
            "path id {path_id} does not match body id {body_id}"
        ))),
        _ => {
            payload.id = Some(path_id);
            Ok(payload)
        }
    }
}

#[utoipa::path(
    get, path = "/costo-materia", tag = "costo-materia",
    responses(
        (status = 200, description = "All material costs, or the text `No data found` when there are none", body = [crate::openapi::MaterialCostDoc]),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Model>>, ApiError> {
    debug!("list material costs");
    let rows = state.service.get_all().await?;
    info!(count = rows.len(), "listed material costs");
    Ok(Json(rows))
}

#[utoipa::path(
    post, path = "/costo-materia", tag = "costo-materia",
    request_body = crate::openapi::MaterialCostPayloadDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::MaterialCostDoc),
        (status = 400, description = "Rejected by a business rule"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn create(State(state): State<AppState>, Json(payload): Json<MaterialCostPayload>) -> Result<Json<Model>, ApiError> {
    let created = state.service.create(payload).await?;
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/costo-materia/{id}", tag = "costo-materia",
    params(("id" = i64, Path, description = "Material cost id")),
    request_body = crate::openapi::MaterialCostPayloadDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MaterialCostDoc),
        (status = 400, description = "Unknown id, mismatched ids or invalid fields; body is the reason"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<MaterialCostPayload>,
) -> Result<Json<Model>, ApiError> {
    let payload = reconcile_id(id, payload)?;
    let updated = state.service.update(payload).await?;
    info!(id = updated.id, "updated material cost");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/costo-materia/{id}", tag = "costo-materia",
    params(("id" = i64, Path, description = "Material cost id")),
    responses(
        (status = 200, description = "Deleted, empty body"),
        (status = 400, description = "Unknown id"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    state.service.delete(id).await?;
    Ok(StatusCode::OK)
}
