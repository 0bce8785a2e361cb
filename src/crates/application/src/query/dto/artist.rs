use crate::query::dto::show::ArtistShowDto;
use model::artist::Artist;
use model::show::ArtistShow;
use serde::Serialize;

/// 基础投影：搜索结果、艺术家总览与删除确认
#[derive(Debug, Serialize)]
pub struct ArtistRefDto {
    pub id: i64,
    pub name: String,
}

impl From<Artist> for ArtistRefDto {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
        }
    }
}

/// 完整投影：艺术家详情页，含过去/即将演出及计数
#[derive(Debug, Serialize)]
pub struct ArtistDetailDto {
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
    pub past_shows: Vec<ArtistShowDto>,
    pub upcoming_shows: Vec<ArtistShowDto>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetailDto {
    pub fn assemble(artist: Artist, past: Vec<ArtistShow>, upcoming: Vec<ArtistShow>) -> Self {
        let past_shows: Vec<ArtistShowDto> = past.into_iter().map(Into::into).collect();
        let upcoming_shows: Vec<ArtistShowDto> = upcoming.into_iter().map(Into::into).collect();
        Self {
            id: artist.id,
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            image_link: artist.image_link,
            genres: artist.genres,
            facebook_link: artist.facebook_link,
            website: artist.website,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
