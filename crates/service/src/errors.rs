use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid field value: {0}")]
    InvalidField(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }
}
