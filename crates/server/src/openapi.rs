use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::crewmembers::create,
        crate::routes::crewmembers::get,
        crate::routes::crewmembers::list,
        crate::routes::crewmembers::replace,
        crate::routes::crewmembers::update_fields,
        crate::routes::crewmembers::delete,
        crate::routes::spaceships::create,
        crate::routes::spaceships::get,
        crate::routes::spaceships::list,
        crate::routes::spaceships::replace,
        crate::routes::spaceships::update_fields,
        crate::routes::spaceships::delete,
        crate::routes::spaceships::current,
    ),
    components(
        schemas(
            HealthResponse,
            crate::routes::crewmembers::CrewmemberInput,
            crate::routes::spaceships::SpaceshipInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "crewmember"),
        (name = "spaceship")
    )
)]
pub struct ApiDoc;
