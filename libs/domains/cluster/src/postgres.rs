use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::entity::{job, node};
use crate::error::ClusterResult;
use crate::models::{Job, NewNode, Node};
use crate::repository::NodeRepository;

pub struct PgNodeRepository {
    nodes: BaseRepository<node::Entity>,
    db: DatabaseConnection,
}

impl PgNodeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            nodes: BaseRepository::new(db.clone()),
            db,
        }
    }
}

#[async_trait]
impl NodeRepository for PgNodeRepository {
    async fn create(&self, input: NewNode) -> ClusterResult<Node> {
        let active_model: node::ActiveModel = input.into();
        let model = self.nodes.insert(active_model).await?;

        tracing::info!(node_id = %model.id, node_name = %model.name, "registered node");
        Ok(model.into())
    }

    async fn find_by_name(&self, name: &str) -> ClusterResult<Option<Node>> {
        let model = node::Entity::find()
            .filter(node::Column::Name.eq(name))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list_all(&self) -> ClusterResult<Vec<Node>> {
        let models = node::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update_jobs_count(&self, node_id: Uuid, jobs_count: i32) -> ClusterResult<()> {
        let Some(existing) = self.nodes.find_by_id(node_id).await? else {
            return Ok(());
        };

        let mut active_model: node::ActiveModel = existing.into();
        active_model.jobs_count = Set(jobs_count);
        active_model.updated_at = Set(chrono::Utc::now().into());
        self.nodes.update(active_model).await?;
        Ok(())
    }

    async fn replace_jobs(&self, node_id: Uuid, jobs: Vec<Job>) -> ClusterResult<()> {
        job::Entity::delete_many()
            .filter(job::Column::NodeId.eq(node_id))
            .exec(&self.db)
            .await?;

        if jobs.is_empty() {
            return Ok(());
        }

        let active_models: Vec<job::ActiveModel> = jobs
            .into_iter()
            .map(|j| job::ActiveModel {
                id: Set(j.id),
                node_id: Set(node_id),
                percent: Set(j.percent_complete),
                duration: Set(j.duration_seconds),
                start_time: Set(j.start_time.into()),
                finish_time: Set(j.finish_time.map(Into::into)),
            })
            .collect();

        job::Entity::insert_many(active_models)
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn delete(&self, node_id: Uuid) -> ClusterResult<()> {
        self.nodes.delete_by_id(node_id).await?;
        Ok(())
    }
}
