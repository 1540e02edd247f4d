use std::collections::HashMap;
use std::sync::Arc;

use sea_orm::ActiveValue::Set;
use tracing::info;

use models::spaceship;

use crate::errors::ServiceError;
use crate::spaceship::repository::SpaceshipRepository;

/// Thin application service over the spaceship record store.
pub struct SpaceshipService<R: SpaceshipRepository> {
    repo: Arc<R>,
}

impl<R: SpaceshipRepository> SpaceshipService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Persist a new spaceship; the store assigns the id.
    pub async fn create(&self, name: &str, fuel: i32) -> Result<spaceship::Model, ServiceError> {
        let record = spaceship::ActiveModel {
            name: Set(name.to_string()),
            fuel: Set(fuel),
            ..Default::default()
        };
        let created = self.repo.save(record).await?;
        info!(id = created.id, "created spaceship");
        Ok(created)
    }

    pub async fn get(&self, id: i64) -> Result<Option<spaceship::Model>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    pub async fn list(&self) -> Result<Vec<spaceship::Model>, ServiceError> {
        self.repo.find_all().await
    }

    /// Full replace at `id`. The path id wins over anything in the payload,
    /// and a missing row is created rather than rejected.
    pub async fn replace(&self, id: i64, name: &str, fuel: i32) -> Result<spaceship::Model, ServiceError> {
        let record = spaceship::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            fuel: Set(fuel),
        };
        let saved = self.repo.save(record).await?;
        info!(id = saved.id, "replaced spaceship");
        Ok(saved)
    }

    /// Merge the named fields into the stored record and persist the result.
    pub async fn update_fields(
        &self,
        id: i64,
        fields: &HashMap<String, String>,
    ) -> Result<spaceship::Model, ServiceError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("spaceship"))?;
        let merged = apply_fields(existing, fields)?;
        let record = spaceship::ActiveModel {
            id: Set(merged.id),
            name: Set(merged.name),
            fuel: Set(merged.fuel),
        };
        self.repo.save(record).await
    }

    /// Unconditional delete; removing an id that was never stored is a no-op.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "deleted spaceship");
        Ok(())
    }
}

/// Message for the cookie-identified "current" spaceship. The token is
/// echoed verbatim and never checked against the store.
pub fn current_selection(token: Option<&str>) -> String {
    match token {
        Some(id) => format!("Your current spaceship has the id of {}", id),
        None => "You do not have a current spaceship".to_string(),
    }
}

/// Field-map merge for PATCH bodies. Known keys overwrite the matching
/// field; unknown keys are ignored. Numeric values arrive as decimal strings
/// and must parse as `i32`.
fn apply_fields(
    mut record: spaceship::Model,
    fields: &HashMap<String, String>,
) -> Result<spaceship::Model, ServiceError> {
    for (key, value) in fields {
        match key.as_str() {
            "name" => record.name = value.clone(),
            "fuel" => {
                record.fuel = value.parse().map_err(|_| {
                    ServiceError::InvalidField(format!("fuel must be an integer, got {:?}", value))
                })?;
            }
            _ => {}
        }
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemorySpaceshipRepository;

    fn service() -> SpaceshipService<MemorySpaceshipRepository> {
        SpaceshipService::new(Arc::new(MemorySpaceshipRepository::default()))
    }

    fn model(id: i64, name: &str, fuel: i32) -> spaceship::Model {
        spaceship::Model { id, name: name.into(), fuel }
    }

    #[tokio::test]
    async fn create_and_list_three() {
        let svc = service();
        assert!(svc.list().await.unwrap().is_empty());
        for name in ["Apollo 11", "Battlestar Galactica", "Apollo 13"] {
            svc.create(name, 100).await.unwrap();
        }
        assert_eq!(svc.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn save_all_seeds_store_for_listing() {
        let repo = Arc::new(MemorySpaceshipRepository::default());
        let svc = SpaceshipService::new(repo.clone());
        let records = ["Apollo 11", "Battlestar Galactica", "Apollo 13"]
            .into_iter()
            .map(|name| spaceship::ActiveModel {
                name: Set(name.to_string()),
                fuel: Set(100),
                ..Default::default()
            })
            .collect();
        repo.save_all(records).await.unwrap();
        assert_eq!(svc.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn replace_forces_path_id() {
        let svc = service();
        let created = svc.create("Apollo 11", 100).await.unwrap();
        let replaced = svc.replace(created.id, "Challenger", 90).await.unwrap();
        assert_eq!(replaced, model(created.id, "Challenger", 90));
        assert_eq!(svc.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_fields_parses_fuel_string() {
        let svc = service();
        let created = svc.create("Apollo 11", 100).await.unwrap();

        let mut fields = HashMap::new();
        fields.insert("fuel".to_string(), "95".to_string());
        let updated = svc.update_fields(created.id, &fields).await.unwrap();
        assert_eq!(updated, model(created.id, "Apollo 11", 95));
    }

    #[tokio::test]
    async fn update_fields_rejects_non_integer_fuel() {
        let svc = service();
        let created = svc.create("Apollo 11", 100).await.unwrap();

        let mut fields = HashMap::new();
        fields.insert("fuel".to_string(), "full".to_string());
        let err = svc.update_fields(created.id, &fields).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidField(_)));
    }

    #[tokio::test]
    async fn update_fields_merges_name_only() {
        let svc = service();
        let created = svc.create("Apollo 11", 100).await.unwrap();

        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "Challenger".to_string());
        let updated = svc.update_fields(created.id, &fields).await.unwrap();
        assert_eq!(updated, model(created.id, "Challenger", 100));
    }

    #[tokio::test]
    async fn delete_then_get_is_absent() {
        let svc = service();
        let created = svc.create("Apollo 13", 100).await.unwrap();
        svc.delete(created.id).await.unwrap();
        assert_eq!(svc.get(created.id).await.unwrap(), None);
    }

    #[test]
    fn current_selection_messages() {
        assert_eq!(current_selection(None), "You do not have a current spaceship");
        assert_eq!(current_selection(Some("42")), "Your current spaceship has the id of 42");
        // No validation against the id space; the token is echoed verbatim.
        assert_eq!(
            current_selection(Some("not-an-id")),
            "Your current spaceship has the id of not-an-id"
        );
    }
}
