use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::info;

use models::spaceship;
use service::spaceship::current_selection;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

/// Create/replace payload; same conventions as the crewmember input.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SpaceshipInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fuel: i32,
}

#[utoipa::path(
    post, path = "/spaceship", tag = "spaceship",
    request_body = SpaceshipInput,
    responses(
        (status = 200, description = "Created"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<SpaceshipInput>,
) -> Result<Json<spaceship::Model>, JsonApiError> {
    let created = state.spaceships.create(&input.name, input.fuel).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/spaceship/{id}", tag = "spaceship",
    params(("id" = i64, Path, description = "Spaceship id")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<spaceship::Model>, StatusCode> {
    match state.spaceships.get(id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    get, path = "/spaceship", tag = "spaceship",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<spaceship::Model>>, JsonApiError> {
    let list = state.spaceships.list().await?;
    info!(count = list.len(), "list spaceships");
    Ok(Json(list))
}

#[utoipa::path(
    put, path = "/spaceship/{id}", tag = "spaceship",
    params(("id" = i64, Path, description = "Spaceship id")),
    request_body = SpaceshipInput,
    responses(
        (status = 200, description = "Replaced"),
        (status = 500, description = "Replace Failed")
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<SpaceshipInput>,
) -> Result<Json<spaceship::Model>, JsonApiError> {
    let saved = state.spaceships.replace(id, &input.name, input.fuel).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    patch, path = "/spaceship/{id}", tag = "spaceship",
    params(("id" = i64, Path, description = "Spaceship id")),
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
) -> Result<Json<spaceship::Model>, JsonApiError> {
    let updated = state.spaceships.update_fields(id, &fields).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/spaceship/{id}", tag = "spaceship",
    params(("id" = i64, Path, description = "Spaceship id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<String, JsonApiError> {
    state.spaceships.delete(id).await?;
    Ok(format!("The spaceship with an id of {} has been deleted from the database", id))
}

#[utoipa::path(
    get, path = "/spaceship/current", tag = "spaceship",
    responses((status = 200, description = "OK"))
)]
pub async fn current(jar: CookieJar) -> String {
    // Stateless read: the optional `current` cookie is echoed, never looked up.
    current_selection(jar.get("current").map(|c| c.value()))
}
