//! Create `material_cost` table.
//! One row per material with its unit cost.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaterialCost::Table)
                    .if_not_exists()
                    .col(big_integer(MaterialCost::Id).auto_increment().primary_key())
                    .col(string_len(MaterialCost::Name, 128).not_null())
                    .col(double(MaterialCost::Cost).not_null())
                    .col(timestamp_with_time_zone(MaterialCost::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(MaterialCost::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_material_cost_name")
                    .table(MaterialCost::Table)
                    .col(MaterialCost::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MaterialCost::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MaterialCost {
    Table,
    Id,
    Name,
    Cost,
    CreatedAt,
    UpdatedAt,
}
