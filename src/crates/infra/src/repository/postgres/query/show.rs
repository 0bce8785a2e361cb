use application::query::dao::ShowDao;
use application::query::QueryError;
use async_trait::async_trait;
use model::show::{ArtistShow, ShowListing, VenueShow};
use sea_orm::*;

pub struct ShowDaoImpl {
    db: DatabaseConnection,
}

impl ShowDaoImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, Clone, FromQueryResult)]
struct VenueShowRow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, FromQueryResult)]
struct ArtistShowRow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, FromQueryResult)]
struct ShowListingRow {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: chrono::NaiveDateTime,
}

#[async_trait]
impl ShowDao for ShowDaoImpl {
    async fn list_for_venue(&self, venue_id: i64) -> Result<Vec<VenueShow>, QueryError> {
        let sql = r#"SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                s.start_time
            FROM "show" s
            JOIN artist a ON a.id = s.artist_id
            WHERE s.venue_id = $1
            ORDER BY s.start_time"#;

        let rows: Vec<VenueShowRow> =
            VenueShowRow::find_by_statement(Statement::from_sql_and_values(
                DbBackend::Postgres,
                sql,
                vec![venue_id.into()],
            ))
            .all(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| VenueShow {
                artist_id: row.artist_id,
                artist_name: row.artist_name,
                artist_image_link: row.artist_image_link,
                start_time: row.start_time,
            })
            .collect())
    }

    async fn list_for_artist(&self, artist_id: i64) -> Result<Vec<ArtistShow>, QueryError> {
        let sql = r#"SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
                s.start_time
            FROM "show" s
            JOIN venue v ON v.id = s.venue_id
            WHERE s.artist_id = $1
            ORDER BY s.start_time"#;

        let rows: Vec<ArtistShowRow> =
            ArtistShowRow::find_by_statement(Statement::from_sql_and_values(
                DbBackend::Postgres,
                sql,
                vec![artist_id.into()],
            ))
            .all(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| ArtistShow {
                venue_id: row.venue_id,
                venue_name: row.venue_name,
                venue_image_link: row.venue_image_link,
                start_time: row.start_time,
            })
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<ShowListing>, QueryError> {
        let sql = r#"SELECT s.venue_id, v.name AS venue_name,
                s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                s.start_time
            FROM "show" s
            JOIN venue v ON v.id = s.venue_id
            JOIN artist a ON a.id = s.artist_id
            ORDER BY s.start_time DESC"#;

        let rows: Vec<ShowListingRow> =
            ShowListingRow::find_by_statement(Statement::from_string(DbBackend::Postgres, sql))
                .all(&self.db)
                .await
                .map_err(|e| QueryError::DbError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| ShowListing {
                venue_id: row.venue_id,
                venue_name: row.venue_name,
                artist_id: row.artist_id,
                artist_name: row.artist_name,
                artist_image_link: row.artist_image_link,
                start_time: row.start_time,
            })
            .collect())
    }
}
