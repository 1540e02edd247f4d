use std::collections::HashMap;
use std::sync::Arc;

use sea_orm::ActiveValue::Set;
use tracing::info;

use models::crewmember;

use crate::crewmember::repository::CrewmemberRepository;
use crate::errors::ServiceError;

/// Thin application service over the crewmember record store.
pub struct CrewmemberService<R: CrewmemberRepository> {
    repo: Arc<R>,
}

impl<R: CrewmemberRepository> CrewmemberService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Persist a new crewmember; the store assigns the id.
    pub async fn create(&self, name: &str, morale: i32) -> Result<crewmember::Model, ServiceError> {
        let record = crewmember::ActiveModel {
            name: Set(name.to_string()),
            morale: Set(morale),
            ..Default::default()
        };
        let created = self.repo.save(record).await?;
        info!(id = created.id, "created crewmember");
        Ok(created)
    }

    pub async fn get(&self, id: i64) -> Result<Option<crewmember::Model>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    pub async fn list(&self) -> Result<Vec<crewmember::Model>, ServiceError> {
        self.repo.find_all().await
    }

    /// Full replace at `id`. The path id wins over anything in the payload,
    /// and a missing row is created rather than rejected.
    pub async fn replace(&self, id: i64, name: &str, morale: i32) -> Result<crewmember::Model, ServiceError> {
        let record = crewmember::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            morale: Set(morale),
        };
        let saved = self.repo.save(record).await?;
        info!(id = saved.id, "replaced crewmember");
        Ok(saved)
    }

    /// Merge the named fields into the stored record and persist the result.
    pub async fn update_fields(
        &self,
        id: i64,
        fields: &HashMap<String, String>,
    ) -> Result<crewmember::Model, ServiceError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("crewmember"))?;
        let merged = apply_fields(existing, fields)?;
        let record = crewmember::ActiveModel {
            id: Set(merged.id),
            name: Set(merged.name),
            morale: Set(merged.morale),
        };
        self.repo.save(record).await
    }

    /// Unconditional delete; removing an id that was never stored is a no-op.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "deleted crewmember");
        Ok(())
    }
}

/// Field-map merge for PATCH bodies. Known keys overwrite the matching
/// field; unknown keys are ignored. Numeric values arrive as decimal strings
/// and must parse as `i32`.
fn apply_fields(
    mut record: crewmember::Model,
    fields: &HashMap<String, String>,
) -> Result<crewmember::Model, ServiceError> {
    for (key, value) in fields {
        match key.as_str() {
            "name" => record.name = value.clone(),
            "morale" => {
                record.morale = value.parse().map_err(|_| {
                    ServiceError::InvalidField(format!("morale must be an integer, got {:?}", value))
                })?;
            }
            _ => {}
        }
    }
    Ok(record)
}
