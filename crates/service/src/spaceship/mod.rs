pub mod repository;
pub mod service;

pub use self::repository::{SeaOrmSpaceshipRepository, SpaceshipRepository};
pub use self::service::{current_selection, SpaceshipService};
