use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use models::material_cost::{MaterialCostPayload, Model};

use crate::errors::ServiceError;
use crate::material_cost::repository::MaterialCostRepository;

const ENTITY: &str = "Material cost";

/// Operations the `costo-materia` endpoint delegates to.
///
/// `get_all` signals [`ServiceError::NoData`] instead of returning an empty list.
/// `update` and `delete` signal [`ServiceError::Invalid`] with `Material cost not found`
/// when the target id does not exist.
#[async_trait]
pub trait MaterialCostService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Model>, ServiceError>;
    async fn create(&self, payload: MaterialCostPayload) -> Result<Model, ServiceError>;
    /// The payload must carry the id of the row to update.
    async fn update(&self, payload: MaterialCostPayload) -> Result<Model, ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}

/// Application service over any [`MaterialCostRepository`].
pub struct MaterialCostServiceImpl<R: MaterialCostRepository> {
    repo: Arc<R>,
}

impl<R: MaterialCostRepository> MaterialCostServiceImpl<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }
}

#[async_trait]
impl<R: MaterialCostRepository + 'static> MaterialCostService for MaterialCostServiceImpl<R> {
    async fn get_all(&self) -> Result<Vec<Model>, ServiceError> {
        let rows = self.repo.list().await?;
        if rows.is_empty() {
            return Err(ServiceError::NoData);
        }
        Ok(rows)
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    async fn create(&self, payload: MaterialCostPayload) -> Result<Model, ServiceError> {
        let created = self.repo.create(&payload).await?;
        info!(id = created.id, "material cost created");
        Ok(created)
    }

    #[instrument(skip(self, payload), fields(id = ?payload.id))]
    async fn update(&self, payload: MaterialCostPayload) -> Result<Model, ServiceError> {
        let Some(id) = payload.id else {
            return Err(ServiceError::Invalid("id is required".into()));
        };
        match self.repo.update(id, &payload).await? {
            Some(updated) => Ok(updated),
            None => {
                warn!(id, "update target missing");
                Err(ServiceError::not_found(ENTITY))
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? {
            info!(id, "material cost deleted");
            Ok(())
        } else {
            warn!(id, "delete target missing");
            Err(ServiceError::not_found(ENTITY))
        }
    }
}
