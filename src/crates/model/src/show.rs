use crate::ModelError;
use async_trait::async_trait;
use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Show {
    pub id: i64,
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: NaiveDateTime,
}

/// 待持久化的演出字段（不含 id）
#[derive(Debug, Clone)]
pub struct ShowDraft {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: NaiveDateTime,
}

/// 带起始时间的记录，供过去/即将分桶使用
pub trait Scheduled {
    fn start_time(&self) -> NaiveDateTime;
}

impl Scheduled for Show {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}

/// 场馆详情页视角的演出：联结了对端艺术家
#[derive(Debug, Clone)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}

/// 艺术家详情页视角的演出：联结了对端场馆
#[derive(Debug, Clone)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: NaiveDateTime,
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}

/// 全局演出列表行：同时联结场馆与艺术家
#[derive(Debug, Clone)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

#[async_trait]
pub trait ShowRepository: Send + Sync {
    async fn insert(&self, draft: ShowDraft) -> Result<Show, ModelError>;
}
