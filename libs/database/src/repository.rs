//! Generic base repository for SeaORM entities keyed by UUID.
//!
//! Domain crates build their own typed repository traits on top of this;
//! `BaseRepository` just removes the CRUD boilerplate that's identical
//! across every entity.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PrimaryKeyTrait};
use uuid::Uuid;

/// Marker for entities whose primary key is a `Uuid`.
pub trait UuidEntity: EntityTrait<PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>> {}

impl<E> UuidEntity for E where E: EntityTrait<PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>> {}

/// Thin wrapper around a [`DatabaseConnection`] scoped to one entity.
pub struct BaseRepository<E: UuidEntity> {
    db: DatabaseConnection,
    _marker: std::marker::PhantomData<E>,
}

impl<E: UuidEntity> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn insert(&self, active_model: E::ActiveModel) -> Result<E::Model, DbErr>
    where
        E::ActiveModel: ActiveModelTrait<Entity = E> + Send,
    {
        active_model.insert(&self.db).await
    }

    pub async fn update(&self, active_model: E::ActiveModel) -> Result<E::Model, DbErr>
    where
        E::ActiveModel: ActiveModelTrait<Entity = E> + Send,
    {
        active_model.update(&self.db).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(&self.db).await
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
