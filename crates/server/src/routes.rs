use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::crewmember::{CrewmemberService, SeaOrmCrewmemberRepository};
use service::spaceship::{SeaOrmSpaceshipRepository, SpaceshipService};

pub mod crewmembers;
pub mod spaceships;

/// Shared handler state: one service per record type over the same connection.
#[derive(Clone)]
pub struct ServerState {
    pub crewmembers: Arc<CrewmemberService<SeaOrmCrewmemberRepository>>,
    pub spaceships: Arc<SpaceshipService<SeaOrmSpaceshipRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            crewmembers: Arc::new(CrewmemberService::new(Arc::new(SeaOrmCrewmemberRepository {
                db: db.clone(),
            }))),
            spaceships: Arc::new(SpaceshipService::new(Arc::new(SeaOrmSpaceshipRepository { db }))),
        }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router, including docs and observability layers.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let crewmember_routes = Router::new()
        .route("/crewmember", get(crewmembers::list).post(crewmembers::create))
        .route(
            "/crewmember/:id",
            get(crewmembers::get)
                .put(crewmembers::replace)
                .patch(crewmembers::update_fields)
                .delete(crewmembers::delete),
        );

    // `/spaceship/current` is a static segment; axum matches it ahead of `:id`.
    let spaceship_routes = Router::new()
        .route("/spaceship", get(spaceships::list).post(spaceships::create))
        .route("/spaceship/current", get(spaceships::current))
        .route(
            "/spaceship/:id",
            get(spaceships::get)
                .put(spaceships::replace)
                .patch(spaceships::update_fields)
                .delete(spaceships::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(crewmember_routes)
        .merge(spaceship_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
