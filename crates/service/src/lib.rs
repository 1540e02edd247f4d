//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates record-store access from HTTP concerns.
//! - Reuses entity definitions from the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod crewmember;
pub mod errors;
pub mod spaceship;

#[cfg(test)]
pub mod test_support;
