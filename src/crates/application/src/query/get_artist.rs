use crate::query::dao::{ArtistDao, ShowDao};
use crate::query::dto::artist::ArtistDetailDto;
use crate::query::shared::partition_shows;
use crate::query::QueryError;
use chrono::NaiveDateTime;
use std::sync::Arc;

pub struct GetArtist {
    artist_dao: Arc<dyn ArtistDao + Send + Sync>,
    show_dao: Arc<dyn ShowDao + Send + Sync>,
}

impl GetArtist {
    pub fn new(
        artist_dao: Arc<dyn ArtistDao + Send + Sync>,
        show_dao: Arc<dyn ShowDao + Send + Sync>,
    ) -> Self {
        Self {
            artist_dao,
            show_dao,
        }
    }

    pub async fn handle(
        &self,
        artist_id: i64,
        now: NaiveDateTime,
    ) -> Result<ArtistDetailDto, QueryError> {
        let artist = self
            .artist_dao
            .get_by_id(artist_id)
            .await?
            .ok_or_else(|| QueryError::NotFound(format!("Artist not found: {}", artist_id)))?;

        let shows = self.show_dao.list_for_artist(artist_id).await?;
        let (past, upcoming) = partition_shows(shows, now);

        Ok(ArtistDetailDto::assemble(artist, past, upcoming))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::shared::parse_datetime;
    use async_trait::async_trait;
    use model::artist::Artist;
    use model::show::{ArtistShow, ShowListing, VenueShow};
    use tokio::runtime::Runtime;

    struct FakeArtistDao {
        artists: Vec<Artist>,
    }

    #[async_trait]
    impl ArtistDao for FakeArtistDao {
        async fn get_by_id(&self, id: i64) -> Result<Option<Artist>, QueryError> {
            Ok(self.artists.iter().find(|a| a.id == id).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Artist>, QueryError> {
            unimplemented!()
        }

        async fn search(&self, _term: &str) -> Result<Vec<Artist>, QueryError> {
            unimplemented!()
        }
    }

    struct FakeShowDao {
        shows: Vec<ArtistShow>,
    }

    #[async_trait]
    impl ShowDao for FakeShowDao {
        async fn list_for_venue(&self, _venue_id: i64) -> Result<Vec<VenueShow>, QueryError> {
            unimplemented!()
        }

        async fn list_for_artist(&self, _artist_id: i64) -> Result<Vec<ArtistShow>, QueryError> {
            Ok(self.shows.clone())
        }

        async fn list_all(&self) -> Result<Vec<ShowListing>, QueryError> {
            unimplemented!()
        }
    }

    fn sample_artist() -> Artist {
        Artist {
            id: 4,
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            image_link: "".to_string(),
            genres: vec!["Rock n Roll".to_string()],
            facebook_link: "".to_string(),
            website: "".to_string(),
            seeking_venue: true,
            seeking_description: "Looking for shows to perform".to_string(),
        }
    }

    fn artist_show(venue_id: i64, raw: &str) -> ArtistShow {
        ArtistShow {
            venue_id,
            venue_name: format!("venue-{}", venue_id),
            venue_image_link: "".to_string(),
            start_time: parse_datetime(raw).unwrap(),
        }
    }

    #[test]
    fn test_detail_carries_venue_info_per_show() {
        let rt = Runtime::new().unwrap();
        let now = parse_datetime("2020-01-01 00:00:00").unwrap();

        let query = GetArtist::new(
            Arc::new(FakeArtistDao {
                artists: vec![sample_artist()],
            }),
            Arc::new(FakeShowDao {
                shows: vec![
                    artist_show(1, "2019-05-21T21:30:00.000Z"),
                    artist_show(3, "2035-04-01T20:00:00.000Z"),
                ],
            }),
        );
        let detail = rt.block_on(query.handle(4, now)).unwrap();

        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 1);
        assert_eq!(detail.past_shows[0].venue_id, 1);
        assert_eq!(detail.upcoming_shows[0].venue_name, "venue-3");
        assert!(detail.seeking_venue);
    }

    #[test]
    fn test_missing_artist_is_not_found() {
        let rt = Runtime::new().unwrap();
        let now = parse_datetime("2020-01-01 00:00:00").unwrap();

        let query = GetArtist::new(
            Arc::new(FakeArtistDao { artists: vec![] }),
            Arc::new(FakeShowDao { shows: vec![] }),
        );
        let err = rt.block_on(query.handle(9, now)).unwrap_err();
        assert!(matches!(err, QueryError::NotFound(_)));
    }
}
