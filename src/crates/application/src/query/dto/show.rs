use crate::query::shared::{format_datetime, DateFormat};
use model::show::{ArtistShow, ShowListing, VenueShow};
use serde::Serialize;

/// 场馆详情页中的一场演出，携带对端艺术家信息
#[derive(Debug, Serialize)]
pub struct VenueShowDto {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

impl From<VenueShow> for VenueShowDto {
    fn from(show: VenueShow) -> Self {
        Self {
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: format_datetime(&show.start_time, DateFormat::default()),
        }
    }
}

/// 艺术家详情页中的一场演出，携带对端场馆信息
#[derive(Debug, Serialize)]
pub struct ArtistShowDto {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: String,
}

impl From<ArtistShow> for ArtistShowDto {
    fn from(show: ArtistShow) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            venue_image_link: show.venue_image_link,
            start_time: format_datetime(&show.start_time, DateFormat::default()),
        }
    }
}

/// 全局演出列表的一行
#[derive(Debug, Serialize)]
pub struct ShowListingDto {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

impl From<ShowListing> for ShowListingDto {
    fn from(show: ShowListing) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: format_datetime(&show.start_time, DateFormat::default()),
        }
    }
}
