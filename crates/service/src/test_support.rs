#![cfg(test)]
//! In-memory record stores used by the service unit tests. They honor the
//! same save semantics as the SeaORM repositories: insert without an id,
//! upsert with one.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use sea_orm::ActiveValue;

use models::{crewmember, spaceship};

use crate::crewmember::repository::CrewmemberRepository;
use crate::errors::ServiceError;
use crate::spaceship::repository::SpaceshipRepository;

fn value_of<V: Into<sea_orm::Value>>(v: ActiveValue<V>) -> Option<V> {
    match v {
        ActiveValue::Set(x) | ActiveValue::Unchanged(x) => Some(x),
        ActiveValue::NotSet => None,
    }
}

pub struct MemoryCrewmemberRepository {
    rows: Mutex<BTreeMap<i64, crewmember::Model>>,
    next_id: AtomicI64,
}

impl Default for MemoryCrewmemberRepository {
    fn default() -> Self {
        Self { rows: Mutex::new(BTreeMap::new()), next_id: AtomicI64::new(1) }
    }
}

#[async_trait]
impl CrewmemberRepository for MemoryCrewmemberRepository {
    async fn save(&self, record: crewmember::ActiveModel) -> Result<crewmember::Model, ServiceError> {
        let id = value_of(record.id).unwrap_or_else(|| self.next_id.fetch_add(1, Ordering::SeqCst));
        let model = crewmember::Model {
            id,
            name: value_of(record.name).unwrap_or_default(),
            morale: value_of(record.morale).unwrap_or_default(),
        };
        self.rows.lock().unwrap().insert(id, model.clone());
        Ok(model)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<crewmember::Model>, ServiceError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<crewmember::Model>, ServiceError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn save_all(&self, records: Vec<crewmember::ActiveModel>) -> Result<(), ServiceError> {
        for record in records {
            self.save(record).await?;
        }
        Ok(())
    }
}

pub struct MemorySpaceshipRepository {
    rows: Mutex<BTreeMap<i64, spaceship::Model>>,
    next_id: AtomicI64,
}

impl Default for MemorySpaceshipRepository {
    fn default() -> Self {
        Self { rows: Mutex::new(BTreeMap::new()), next_id: AtomicI64::new(1) }
    }
}

#[async_trait]
impl SpaceshipRepository for MemorySpaceshipRepository {
    async fn save(&self, record: spaceship::ActiveModel) -> Result<spaceship::Model, ServiceError> {
        let id = value_of(record.id).unwrap_or_else(|| self.next_id.fetch_add(1, Ordering::SeqCst));
        let model = spaceship::Model {
            id,
            name: value_of(record.name).unwrap_or_default(),
            fuel: value_of(record.fuel).unwrap_or_default(),
        };
        self.rows.lock().unwrap().insert(id, model.clone());
        Ok(model)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<spaceship::Model>, ServiceError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<spaceship::Model>, ServiceError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn save_all(&self, records: Vec<spaceship::ActiveModel>) -> Result<(), ServiceError> {
        for record in records {
            self.save(record).await?;
        }
        Ok(())
    }
}
