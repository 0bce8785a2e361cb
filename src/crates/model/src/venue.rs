use crate::ModelError;
use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// 待持久化的场馆字段（创建与编辑共用，不含 id）
#[derive(Debug, Clone)]
pub struct VenueDraft {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// 场馆列表行：按 (city, state) 聚簇排序，附带即将演出数
#[derive(Debug, Clone)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub upcoming_show_count: i64,
}

#[async_trait]
pub trait VenueRepository: Send + Sync {
    async fn insert(&self, draft: VenueDraft) -> Result<Venue, ModelError>;
    async fn update(&self, id: i64, draft: VenueDraft) -> Result<Venue, ModelError>;
    /// 删除场馆并返回被删除的记录，不存在时返回 None
    async fn delete(&self, id: i64) -> Result<Option<Venue>, ModelError>;
    async fn exists(&self, id: i64) -> Result<bool, ModelError>;
}
