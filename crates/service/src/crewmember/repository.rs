use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use models::crewmember;

use crate::errors::ServiceError;

/// Record-store contract for crewmember rows.
///
/// `save` carries the store semantics the rest of the crate relies on: a
/// record without an id is inserted and assigned one; a record carrying an
/// id is written at that id, creating the row when it does not exist yet.
#[async_trait]
pub trait CrewmemberRepository: Send + Sync {
    async fn save(&self, record: crewmember::ActiveModel) -> Result<crewmember::Model, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<crewmember::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<crewmember::Model>, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
    async fn save_all(&self, records: Vec<crewmember::ActiveModel>) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCrewmemberRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CrewmemberRepository for SeaOrmCrewmemberRepository {
    async fn save(&self, record: crewmember::ActiveModel) -> Result<crewmember::Model, ServiceError> {
        if matches!(record.id, ActiveValue::NotSet) {
            return record.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()));
        }
        crewmember::Entity::insert(record)
            .on_conflict(
                OnConflict::column(crewmember::Column::Id)
                    .update_columns([crewmember::Column::Name, crewmember::Column::Morale])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<crewmember::Model>, ServiceError> {
        crewmember::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<crewmember::Model>, ServiceError> {
        crewmember::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        crewmember::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    async fn save_all(&self, records: Vec<crewmember::ActiveModel>) -> Result<(), ServiceError> {
        if records.is_empty() {
            return Ok(());
        }
        crewmember::Entity::insert_many(records)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}
