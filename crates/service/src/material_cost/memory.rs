use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use models::material_cost::{self, MaterialCostPayload, Model};

use crate::errors::ServiceError;
use crate::material_cost::repository::MaterialCostRepository;

#[derive(Default)]
struct Rows {
    next_id: i64,
    by_id: BTreeMap<i64, Model>,
}

/// Process-local repository. Rows are lost on restart; ids start at 1.
#[derive(Default)]
pub struct InMemoryMaterialCostRepository {
    inner: RwLock<Rows>,
}

impl InMemoryMaterialCostRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl MaterialCostRepository for InMemoryMaterialCostRepository {
    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        let rows = self.inner.read().await;
        Ok(rows.by_id.values().cloned().collect())
    }

    async fn create(&self, payload: &MaterialCostPayload) -> Result<Model, ServiceError> {
        material_cost::validate(payload)?;
        let mut rows = self.inner.write().await;
        rows.next_id += 1;
        let now = Utc::now().into();
        let model = Model {
            id: rows.next_id,
            name: payload.name.trim().to_string(),
            cost: payload.cost,
            created_at: now,
            updated_at: now,
        };
        rows.by_id.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update(&self, id: i64, payload: &MaterialCostPayload) -> Result<Option<Model>, ServiceError> {
        material_cost::validate(payload)?;
        let mut rows = self.inner.write().await;
        let Some(existing) = rows.by_id.get_mut(&id) else { return Ok(None) };
        existing.name = payload.name.trim().to_string();
        existing.cost = payload.cost;
        existing.updated_at = Utc::now().into();
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let mut rows = self.inner.write().await;
        Ok(rows.by_id.remove(&id).is_some())
    }
}
