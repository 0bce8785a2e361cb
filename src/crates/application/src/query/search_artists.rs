use crate::query::dao::ArtistDao;
use crate::query::dto::artist::ArtistRefDto;
use crate::query::dto::SearchResultsDto;
use crate::query::QueryError;
use std::sync::Arc;

pub struct SearchArtists {
    artist_dao: Arc<dyn ArtistDao + Send + Sync>,
}

impl SearchArtists {
    pub fn new(artist_dao: Arc<dyn ArtistDao + Send + Sync>) -> Self {
        Self { artist_dao }
    }

    pub async fn handle(&self, term: &str) -> Result<SearchResultsDto<ArtistRefDto>, QueryError> {
        let artists = self.artist_dao.search(term).await?;
        Ok(SearchResultsDto::new(
            artists.into_iter().map(Into::into).collect(),
        ))
    }
}
