use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Nodes::Table)
                    .if_not_exists()
                    .col(pk_uuid(Nodes::Id))
                    .col(string(Nodes::Name))
                    .col(string(Nodes::Ip))
                    .col(string(Nodes::Port))
                    .col(integer(Nodes::JobsCount).default(0))
                    .col(
                        timestamp_with_time_zone(Nodes::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Nodes::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_nodes_name")
                    .table(Nodes::Table)
                    .col(Nodes::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER nodes_touch_updated_at
                    BEFORE UPDATE ON nodes
                    FOR EACH ROW
                    EXECUTE FUNCTION util.touch_updated_at()
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS nodes_touch_updated_at ON nodes")
            .await?;

        manager
            .drop_table(Table::drop().table(Nodes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Nodes {
    Table,
    Id,
    Name,
    Ip,
    Port,
    JobsCount,
    CreatedAt,
    UpdatedAt,
}
