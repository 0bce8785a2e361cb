use crate::query::dao::ArtistDao;
use crate::query::dto::artist::ArtistRefDto;
use crate::query::QueryError;
use std::sync::Arc;

pub struct GetArtistList {
    artist_dao: Arc<dyn ArtistDao + Send + Sync>,
}

impl GetArtistList {
    pub fn new(artist_dao: Arc<dyn ArtistDao + Send + Sync>) -> Self {
        Self { artist_dao }
    }

    pub async fn handle(&self) -> Result<Vec<ArtistRefDto>, QueryError> {
        let artists = self.artist_dao.get_all().await?;
        Ok(artists.into_iter().map(Into::into).collect())
    }
}
