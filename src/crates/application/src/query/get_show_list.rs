use crate::query::dao::ShowDao;
use crate::query::dto::show::ShowListingDto;
use crate::query::QueryError;
use std::sync::Arc;

pub struct GetShowList {
    show_dao: Arc<dyn ShowDao + Send + Sync>,
}

impl GetShowList {
    pub fn new(show_dao: Arc<dyn ShowDao + Send + Sync>) -> Self {
        Self { show_dao }
    }

    pub async fn handle(&self) -> Result<Vec<ShowListingDto>, QueryError> {
        let shows = self.show_dao.list_all().await?;
        Ok(shows.into_iter().map(Into::into).collect())
    }
}
