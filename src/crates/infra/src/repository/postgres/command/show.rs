use super::db_data::show::ActiveModel;
use async_trait::async_trait;
use model::show::{Show, ShowDraft, ShowRepository};
use model::ModelError;
use sea_orm::*;

#[derive(Clone)]
pub struct ShowRepositoryImpl {
    db: DbConn,
}

impl ShowRepositoryImpl {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShowRepository for ShowRepositoryImpl {
    async fn insert(&self, draft: ShowDraft) -> Result<Show, ModelError> {
        let active_model: ActiveModel = (&draft).into();
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| ModelError::DbErr(e.to_string()))?;

        Ok(model.into())
    }
}
