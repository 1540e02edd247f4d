use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use models::spaceship;

use crate::errors::ServiceError;

/// Record-store contract for spaceship rows; same save semantics as the
/// crewmember store (insert without id, upsert with one).
#[async_trait]
pub trait SpaceshipRepository: Send + Sync {
    async fn save(&self, record: spaceship::ActiveModel) -> Result<spaceship::Model, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<spaceship::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<spaceship::Model>, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
    async fn save_all(&self, records: Vec<spaceship::ActiveModel>) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmSpaceshipRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl SpaceshipRepository for SeaOrmSpaceshipRepository {
    async fn save(&self, record: spaceship::ActiveModel) -> Result<spaceship::Model, ServiceError> {
        if matches!(record.id, ActiveValue::NotSet) {
            return record.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()));
        }
        spaceship::Entity::insert(record)
            .on_conflict(
                OnConflict::column(spaceship::Column::Id)
                    .update_columns([spaceship::Column::Name, spaceship::Column::Fuel])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<spaceship::Model>, ServiceError> {
        spaceship::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<spaceship::Model>, ServiceError> {
        spaceship::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        spaceship::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    async fn save_all(&self, records: Vec<spaceship::ActiveModel>) -> Result<(), ServiceError> {
        if records.is_empty() {
            return Ok(());
        }
        spaceship::Entity::insert_many(records)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}
