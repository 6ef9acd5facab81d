use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const NAME_MAX_LEN: usize = 128;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "material_cost")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub cost: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Request body for create and update. `id` is ignored on create.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialCostPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub cost: f64,
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(errors::ModelError::Validation("name must not be empty".into()));
    }
    if trimmed.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("name must be at most {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_cost(cost: f64) -> Result<(), errors::ModelError> {
    if !cost.is_finite() || cost < 0.0 {
        return Err(errors::ModelError::Validation("cost must be a non-negative number".into()));
    }
    Ok(())
}

pub fn validate(payload: &MaterialCostPayload) -> Result<(), errors::ModelError> {
    validate_name(&payload.name)?;
    validate_cost(payload.cost)
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn create(db: &DatabaseConnection, payload: &MaterialCostPayload) -> Result<Model, errors::ModelError> {
    validate(payload)?;

    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(payload.name.trim().to_string()),
        cost: Set(payload.cost),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Returns `None` when no row has this id.
pub async fn update(db: &DatabaseConnection, id: i64, payload: &MaterialCostPayload) -> Result<Option<Model>, errors::ModelError> {
    validate(payload)?;

    let Some(existing) = find(db, id).await? else { return Ok(None) };
    let mut am: ActiveModel = existing.into();
    am.name = Set(payload.name.trim().to_string());
    am.cost = Set(payload.cost);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

/// Returns true if a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;

    fn payload(name: &str, cost: f64) -> MaterialCostPayload {
        MaterialCostPayload { id: None, name: name.to_string(), cost }
    }

    #[test]
    fn name_rules() {
        assert!(validate_name("Steel").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(NAME_MAX_LEN)).is_ok());
        assert!(validate_name(&"x".repeat(NAME_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn cost_rules() {
        assert!(validate_cost(0.0).is_ok());
        assert!(validate_cost(12.5).is_ok());
        assert!(validate_cost(-0.01).is_err());
        assert!(validate_cost(f64::NAN).is_err());
        assert!(validate_cost(f64::INFINITY).is_err());
    }

    #[test]
    fn validation_message_is_bare() {
        let err = validate(&payload("", 1.0)).unwrap_err();
        assert_eq!(err.to_string(), "name must not be empty");
    }

    #[test]
    fn payload_id_is_optional() {
        let p: MaterialCostPayload = serde_json::from_str(r#"{"name":"Steel","cost":12.5}"#).unwrap();
        assert_eq!(p, payload("Steel", 12.5));
        let p: MaterialCostPayload = serde_json::from_str(r#"{"id":3,"name":"Steel","cost":12.5}"#).unwrap();
        assert_eq!(p.id, Some(3));
    }

    #[tokio::test]
    async fn material_cost_crud() -> anyhow::Result<()> {
        if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
            eprintln!("skip: no database configured");
            return Ok(());
        }
        let db = crate::db::connect().await?;
        migration::Migrator::up(&db, None).await?;

        let created = create(&db, &payload(" Steel ", 12.5)).await?;
        assert_eq!(created.name, "Steel");
        assert_eq!(created.cost, 12.5);

        let found = find(&db, created.id).await?;
        assert_eq!(found.as_ref().map(|m| m.id), Some(created.id));

        let updated = update(&db, created.id, &payload("Stainless", 20.0)).await?.expect("row exists");
        assert_eq!(updated.name, "Stainless");
        assert_eq!(updated.created_at, created.created_at);

        assert!(list(&db).await?.iter().any(|m| m.id == created.id));

        assert!(delete(&db, created.id).await?);
        assert!(!delete(&db, created.id).await?);
        assert!(update(&db, created.id, &payload("Gone", 1.0)).await?.is_none());
        Ok(())
    }
}
