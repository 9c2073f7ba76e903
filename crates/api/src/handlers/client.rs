//! Handlers for the `/clients` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use clientbook_core::clients::validation::{
    validate_create, validate_id_param, validate_update, ClientPayload,
};
use clientbook_core::clients::{Client, ENTITY};
use clientbook_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Unwrap a JSON body, turning extractor rejections into JSON error responses.
fn body(payload: Result<Json<ClientPayload>, JsonRejection>) -> AppResult<ClientPayload> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// GET /api/v1/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = state.clients.list_clients().await?;
    Ok(Json(clients))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Client>> {
    let id = validate_id_param(&raw_id)?;
    let client = state
        .clients
        .get_client(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(client))
}

/// POST /api/v1/clients
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ClientPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let fields = validate_create(body(payload)?)?;
    let client = state.clients.create_client(fields).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// PUT /api/v1/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<ClientPayload>, JsonRejection>,
) -> AppResult<Json<Client>> {
    let id = validate_id_param(&raw_id)?;
    let update = validate_update(body(payload)?)?;
    let client = state.clients.update_client(id, update).await?;
    Ok(Json(client))
}

/// DELETE /api/v1/clients/{id}
///
/// Responds with the record as it was before deletion.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Client>> {
    let id = validate_id_param(&raw_id)?;
    let client = state.clients.delete_client(id).await?;
    Ok(Json(client))
}
