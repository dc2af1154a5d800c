use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

/// Sea-ORM entity for the `nodes` table: the Repository's persisted mirror
/// of each registered Worker.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "nodes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub ip: String,
    pub port: String,
    pub jobs_count: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::job::Entity")]
    Job,
}

impl Related<super::job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Node {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            ip: model.ip,
            port: model.port,
            jobs_count: model.jobs_count,
            jobs: Vec::new(),
        }
    }
}

impl From<crate::models::NewNode> for ActiveModel {
    fn from(input: crate::models::NewNode) -> Self {
        let now = chrono::Utc::now();
        ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            ip: Set(input.ip),
            port: Set(input.port),
            jobs_count: Set(0),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
