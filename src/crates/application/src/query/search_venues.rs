use crate::query::dao::VenueDao;
use crate::query::dto::venue::VenueRefDto;
use crate::query::dto::SearchResultsDto;
use crate::query::QueryError;
use std::sync::Arc;

pub struct SearchVenues {
    venue_dao: Arc<dyn VenueDao + Send + Sync>,
}

impl SearchVenues {
    pub fn new(venue_dao: Arc<dyn VenueDao + Send + Sync>) -> Self {
        Self { venue_dao }
    }

    pub async fn handle(&self, term: &str) -> Result<SearchResultsDto<VenueRefDto>, QueryError> {
        let venues = self.venue_dao.search(term).await?;
        Ok(SearchResultsDto::new(
            venues.into_iter().map(Into::into).collect(),
        ))
    }
}
