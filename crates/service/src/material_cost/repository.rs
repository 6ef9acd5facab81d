use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::material_cost::{self, MaterialCostPayload, Model};

use crate::errors::ServiceError;

#[async_trait]
pub trait MaterialCostRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Model>, ServiceError>;
    async fn create(&self, payload: &MaterialCostPayload) -> Result<Model, ServiceError>;
    /// `Ok(None)` when no row has this id.
    async fn update(&self, id: i64, payload: &MaterialCostPayload) -> Result<Option<Model>, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmMaterialCostRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmMaterialCostRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl MaterialCostRepository for SeaOrmMaterialCostRepository {
    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        Ok(material_cost::list(&self.db).await?)
    }

    async fn create(&self, payload: &MaterialCostPayload) -> Result<Model, ServiceError> {
        Ok(material_cost::create(&self.db, payload).await?)
    }

    async fn update(&self, id: i64, payload: &MaterialCostPayload) -> Result<Option<Model>, ServiceError> {
        Ok(material_cost::update(&self.db, id, payload).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(material_cost::delete(&self.db, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;

    #[tokio::test]
    async fn seaorm_repository_roundtrip() -> anyhow::Result<()> {
        if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
            return Ok(());
        }
        let db = models::db::connect().await?;
        migration::Migrator::up(&db, None).await?;
        let repo = SeaOrmMaterialCostRepository::new(db);

        let created = repo.create(&MaterialCostPayload { id: None, name: "Copper".into(), cost: 8.75 }).await?;
        assert!(repo.list().await?.iter().any(|m| m.id == created.id));

        let updated = repo
            .update(created.id, &MaterialCostPayload { id: Some(created.id), name: "Copper".into(), cost: 9.0 })
            .await?;
        assert_eq!(updated.map(|m| m.cost), Some(9.0));

        assert!(repo.delete(created.id).await?);
        Ok(())
    }
}
