use crate::ModelError;
use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

/// 待持久化的艺术家字段（创建与编辑共用，不含 id）
#[derive(Debug, Clone)]
pub struct ArtistDraft {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

#[async_trait]
pub trait ArtistRepository: Send + Sync {
    async fn insert(&self, draft: ArtistDraft) -> Result<Artist, ModelError>;
    async fn update(&self, id: i64, draft: ArtistDraft) -> Result<Artist, ModelError>;
    /// 删除艺术家并返回被删除的记录，不存在时返回 None
    async fn delete(&self, id: i64) -> Result<Option<Artist>, ModelError>;
    async fn exists(&self, id: i64) -> Result<bool, ModelError>;
}
