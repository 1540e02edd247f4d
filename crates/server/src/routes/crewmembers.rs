use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use models::crewmember;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

/// Create/replace payload. Absent fields fall back to their zero values; an
/// `id` in the body is ignored in favour of the store or the path.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CrewmemberInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub morale: i32,
}

#[utoipa::path(
    post, path = "/crewmember", tag = "crewmember",
    request_body = CrewmemberInput,
    responses(
        (status = 200, description = "Created"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CrewmemberInput>,
) -> Result<Json<crewmember::Model>, JsonApiError> {
    let created = state.crewmembers.create(&input.name, input.morale).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/crewmember/{id}", tag = "crewmember",
    params(("id" = i64, Path, description = "Crewmember id")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<crewmember::Model>, StatusCode> {
    match state.crewmembers.get(id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    get, path = "/crewmember", tag = "crewmember",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<crewmember::Model>>, JsonApiError> {
    let list = state.crewmembers.list().await?;
    info!(count = list.len(), "list crewmembers");
    Ok(Json(list))
}

#[utoipa::path(
    put, path = "/crewmember/{id}", tag = "crewmember",
    params(("id" = i64, Path, description = "Crewmember id")),
    request_body = CrewmemberInput,
    responses(
        (status = 200, description = "Replaced"),
        (status = 500, description = "Replace Failed")
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<CrewmemberInput>,
) -> Result<Json<crewmember::Model>, JsonApiError> {
    let saved = state.crewmembers.replace(id, &input.name, input.morale).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    patch, path = "/crewmember/{id}", tag = "crewmember",
    params(("id" = i64, Path, description = "Crewmember id")),
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Invalid Field"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_fields(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(fields): Json<HashMap<String, String>>,
) -> Result<Json<crewmember::Model>, JsonApiError> {
    let updated = state.crewmembers.update_fields(id, &fields).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/crewmember/{id}", tag = "crewmember",
    params(("id" = i64, Path, description = "Crewmember id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<String, JsonApiError> {
    state.crewmembers.delete(id).await?;
    Ok(format!("The crewmember with an id of {} has been deleted from the database", id))
}
