use crate::query::dto::show::VenueShowDto;
use model::show::VenueShow;
use model::venue::Venue;
use serde::Serialize;

/// 基础投影：搜索结果与删除确认
#[derive(Debug, Serialize)]
pub struct VenueRefDto {
    pub id: i64,
    pub name: String,
}

impl From<Venue> for VenueRefDto {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
        }
    }
}

/// 短投影：地区列表中的场馆条目
#[derive(Debug, Serialize)]
pub struct VenueShortDto {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// 同城同州场馆的一个分组，按请求即时构建
#[derive(Debug, Serialize)]
pub struct AreaDto {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueShortDto>,
}

/// 完整投影：场馆详情页，含过去/即将演出及计数
#[derive(Debug, Serialize)]
pub struct VenueDetailDto {
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
    pub past_shows: Vec<VenueShowDto>,
    pub upcoming_shows: Vec<VenueShowDto>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetailDto {
    pub fn assemble(venue: Venue, past: Vec<VenueShow>, upcoming: Vec<VenueShow>) -> Self {
        let past_shows: Vec<VenueShowDto> = past.into_iter().map(Into::into).collect();
        let upcoming_shows: Vec<VenueShowDto> = upcoming.into_iter().map(Into::into).collect();
        Self {
            id: venue.id,
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            image_link: venue.image_link,
            genres: venue.genres,
            facebook_link: venue.facebook_link,
            website: venue.website,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
