use crate::query::dao::{ShowDao, VenueDao};
use crate::query::dto::venue::VenueDetailDto;
use crate::query::shared::partition_shows;
use crate::query::QueryError;
use chrono::NaiveDateTime;
use std::sync::Arc;

pub struct GetVenue {
    venue_dao: Arc<dyn VenueDao + Send + Sync>,
    show_dao: Arc<dyn ShowDao + Send + Sync>,
}

impl GetVenue {
    pub fn new(
        venue_dao: Arc<dyn VenueDao + Send + Sync>,
        show_dao: Arc<dyn ShowDao + Send + Sync>,
    ) -> Self {
        Self {
            venue_dao,
            show_dao,
        }
    }

    pub async fn handle(
        &self,
        venue_id: i64,
        now: NaiveDateTime,
    ) -> Result<VenueDetailDto, QueryError> {
        let venue = self
            .venue_dao
            .get_by_id(venue_id)
            .await?
            .ok_or_else(|| QueryError::NotFound(format!("Venue not found: {}", venue_id)))?;

        let shows = self.show_dao.list_for_venue(venue_id).await?;
        let (past, upcoming) = partition_shows(shows, now);

        Ok(VenueDetailDto::assemble(venue, past, upcoming))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::shared::parse_datetime;
    use async_trait::async_trait;
    use model::artist::Artist;
    use model::show::{ArtistShow, ShowListing, VenueShow};
    use model::venue::{Venue, VenueSummary};
    use tokio::runtime::Runtime;

    struct FakeVenueDao {
        venues: Vec<Venue>,
    }

    #[async_trait]
    impl VenueDao for FakeVenueDao {
        async fn get_by_id(&self, id: i64) -> Result<Option<Venue>, QueryError> {
            Ok(self.venues.iter().find(|v| v.id == id).cloned())
        }

        async fn get_all(&self, _now: NaiveDateTime) -> Result<Vec<VenueSummary>, QueryError> {
            unimplemented!()
        }

        async fn search(&self, _term: &str) -> Result<Vec<Venue>, QueryError> {
            unimplemented!()
        }
    }

    struct FakeShowDao {
        shows: Vec<VenueShow>,
    }

    #[async_trait]
    impl ShowDao for FakeShowDao {
        async fn list_for_venue(&self, _venue_id: i64) -> Result<Vec<VenueShow>, QueryError> {
            Ok(self.shows.clone())
        }

        async fn list_for_artist(&self, _artist_id: i64) -> Result<Vec<ArtistShow>, QueryError> {
            unimplemented!()
        }

        async fn list_all(&self) -> Result<Vec<ShowListing>, QueryError> {
            unimplemented!()
        }
    }

    fn sample_venue() -> Venue {
        Venue {
            id: 1,
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            image_link: "".to_string(),
            genres: vec!["Jazz".to_string(), "Folk".to_string()],
            facebook_link: "".to_string(),
            website: "".to_string(),
            seeking_talent: true,
            seeking_description: "Looking for local artists".to_string(),
        }
    }

    fn venue_show(artist_id: i64, raw: &str) -> VenueShow {
        VenueShow {
            artist_id,
            artist_name: format!("artist-{}", artist_id),
            artist_image_link: "".to_string(),
            start_time: parse_datetime(raw).unwrap(),
        }
    }

    #[test]
    fn test_detail_splits_and_counts_shows() {
        let rt = Runtime::new().unwrap();
        let now = parse_datetime("2020-01-01 00:00:00").unwrap();

        let query = GetVenue::new(
            Arc::new(FakeVenueDao {
                venues: vec![sample_venue()],
            }),
            Arc::new(FakeShowDao {
                shows: vec![
                    venue_show(4, "2019-05-21T21:30:00.000Z"),
                    venue_show(6, "2035-04-01T20:00:00.000Z"),
                    venue_show(6, "2035-04-08T20:00:00.000Z"),
                ],
            }),
        );
        let detail = rt.block_on(query.handle(1, now)).unwrap();

        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 2);
        assert_eq!(detail.past_shows[0].artist_id, 4);
        assert_eq!(detail.past_shows[0].start_time, "Tue 05, 21, 2019 9:30PM");
        assert_eq!(detail.genres, vec!["Jazz", "Folk"]);
    }

    #[test]
    fn test_show_at_reference_time_is_dropped() {
        let rt = Runtime::new().unwrap();
        let now = parse_datetime("2019-05-21T21:30:00.000Z").unwrap();

        let query = GetVenue::new(
            Arc::new(FakeVenueDao {
                venues: vec![sample_venue()],
            }),
            Arc::new(FakeShowDao {
                shows: vec![venue_show(4, "2019-05-21T21:30:00.000Z")],
            }),
        );
        let detail = rt.block_on(query.handle(1, now)).unwrap();

        assert_eq!(detail.past_shows_count, 0);
        assert_eq!(detail.upcoming_shows_count, 0);
    }

    #[test]
    fn test_missing_venue_is_not_found() {
        let rt = Runtime::new().unwrap();
        let now = parse_datetime("2020-01-01 00:00:00").unwrap();

        let query = GetVenue::new(
            Arc::new(FakeVenueDao { venues: vec![] }),
            Arc::new(FakeShowDao { shows: vec![] }),
        );
        let err = rt.block_on(query.handle(42, now)).unwrap_err();
        assert!(matches!(err, QueryError::NotFound(_)));
    }
}
