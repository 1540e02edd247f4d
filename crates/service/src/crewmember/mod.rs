pub mod repository;
pub mod service;

pub use self::repository::{CrewmemberRepository, SeaOrmCrewmemberRepository};
pub use self::service::CrewmemberService;
