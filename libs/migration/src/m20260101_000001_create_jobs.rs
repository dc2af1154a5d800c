use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260101_000000_create_nodes::Nodes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(pk_uuid(Jobs::Id))
                    .col(uuid(Jobs::NodeId))
                    .col(float(Jobs::Percent).default(0.0))
                    .col(float(Jobs::Duration).default(0.0))
                    .col(timestamp_with_time_zone(Jobs::StartTime))
                    .col(timestamp_with_time_zone_null(Jobs::FinishTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_node_id")
                            .from(Jobs::Table, Jobs::NodeId)
                            .to(Nodes::Table, Nodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_node_id")
                    .table(Jobs::Table)
                    .col(Jobs::NodeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Jobs {
    Table,
    Id,
    NodeId,
    Percent,
    Duration,
    StartTime,
    FinishTime,
}
