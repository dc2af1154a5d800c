pub use sea_orm_migration::prelude::*;

mod m20241128_000000_bootstrap;
mod m20260101_000000_create_nodes;
mod m20260101_000001_create_jobs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241128_000000_bootstrap::Migration),
            Box::new(m20260101_000000_create_nodes::Migration),
            Box::new(m20260101_000001_create_jobs::Migration),
        ]
    }
}
