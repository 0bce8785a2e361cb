use crate::query::QueryError;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use model::artist::Artist;
use model::show::{ArtistShow, ShowListing, VenueShow};
use model::venue::{Venue, VenueSummary};

#[async_trait]
pub trait VenueDao {
    async fn get_by_id(&self, id: i64) -> Result<Option<Venue>, QueryError>;
    /// 按 (city, state) 聚簇排序的场馆列表，附带以 `now` 为基准的即将演出数
    async fn get_all(&self, now: NaiveDateTime) -> Result<Vec<VenueSummary>, QueryError>;
    /// 按名称做大小写不敏感的子串匹配，空串匹配全部
    async fn search(&self, term: &str) -> Result<Vec<Venue>, QueryError>;
}

#[async_trait]
pub trait ArtistDao {
    async fn get_by_id(&self, id: i64) -> Result<Option<Artist>, QueryError>;
    async fn get_all(&self) -> Result<Vec<Artist>, QueryError>;
    /// 按名称做大小写不敏感的子串匹配，空串匹配全部
    async fn search(&self, term: &str) -> Result<Vec<Artist>, QueryError>;
}

#[async_trait]
pub trait ShowDao {
    /// 某场馆的全部演出（联结艺术家），按开始时间升序
    async fn list_for_venue(&self, venue_id: i64) -> Result<Vec<VenueShow>, QueryError>;
    /// 某艺术家的全部演出（联结场馆），按开始时间升序
    async fn list_for_artist(&self, artist_id: i64) -> Result<Vec<ArtistShow>, QueryError>;
    /// 全部演出，按开始时间降序
    async fn list_all(&self) -> Result<Vec<ShowListing>, QueryError>;
}
