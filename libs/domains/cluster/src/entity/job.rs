use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM entity for the `jobs` table: the Repository's best-effort mirror
/// of the jobs a Worker last reported via `GetJobs`. Not a source of truth;
/// the owning Worker's in-memory `WorkerJobSet` is authoritative.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub node_id: Uuid,
    pub percent: f32,
    pub duration: f32,
    pub start_time: DateTimeWithTimeZone,
    pub finish_time: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::node::Entity",
        from = "Column::NodeId",
        to = "super::node::Column::Id"
    )]
    Node,
}

impl Related<super::node::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Node.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Job {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            percent_complete: model.percent,
            start_time: model.start_time.into(),
            duration_seconds: model.duration,
            finish_time: model.finish_time.map(Into::into),
        }
    }
}
