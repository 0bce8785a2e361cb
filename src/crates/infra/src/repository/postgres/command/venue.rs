use super::db_data::venue::{ActiveModel, Entity};
use async_trait::async_trait;
use model::venue::{Venue, VenueDraft, VenueRepository};
use model::ModelError;
use sea_orm::*;

#[derive(Clone)]
pub struct VenueRepositoryImpl {
    db: DbConn,
}

impl VenueRepositoryImpl {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VenueRepository for VenueRepositoryImpl {
    async fn insert(&self, draft: VenueDraft) -> Result<Venue, ModelError> {
        let active_model: ActiveModel = (&draft).into();
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| ModelError::DbErr(e.to_string()))?;

        Ok(model.into())
    }

    async fn update(&self, id: i64, draft: VenueDraft) -> Result<Venue, ModelError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ModelError::DbErr(e.to_string()))?;

        // 检查是否存在
        Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| ModelError::DbErr(e.to_string()))?
            .ok_or_else(|| ModelError::NotFound(format!("venue {} not found", id)))?;

        let mut active_model: ActiveModel = (&draft).into();
        active_model.id = Set(id);
        let model = active_model
            .update(&txn)
            .await
            .map_err(|e| ModelError::DbErr(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| ModelError::DbErr(e.to_string()))?;

        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<Option<Venue>, ModelError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ModelError::DbErr(e.to_string()))?;

        let existing = Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| ModelError::DbErr(e.to_string()))?;

        let Some(model) = existing else {
            return Ok(None);
        };

        // 关联演出由外键级联删除
        Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| ModelError::DbErr(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| ModelError::DbErr(e.to_string()))?;

        Ok(Some(model.into()))
    }

    async fn exists(&self, id: i64) -> Result<bool, ModelError> {
        let result = Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ModelError::DbErr(e.to_string()))?;

        Ok(result.is_some())
    }
}
