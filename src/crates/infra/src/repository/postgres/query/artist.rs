use super::search_pattern;
use application::query::dao::ArtistDao;
use application::query::QueryError;
use async_trait::async_trait;
use model::artist::Artist;
use sea_orm::*;

pub struct ArtistDaoImpl {
    db: DatabaseConnection,
}

impl ArtistDaoImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, Clone, FromQueryResult)]
struct ArtistRow {
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
}

impl From<ArtistRow> for Artist {
    fn from(row: ArtistRow) -> Self {
        Artist {
            id: row.id,
            name: row.name,
            city: row.city,
            state: row.state,
            phone: row.phone,
            image_link: row.image_link,
            genres: row.genres,
            facebook_link: row.facebook_link,
            website: row.website,
            seeking_venue: row.seeking_venue,
            seeking_description: row.seeking_description,
        }
    }
}

#[async_trait]
impl ArtistDao for ArtistDaoImpl {
    async fn get_by_id(&self, id: i64) -> Result<Option<Artist>, QueryError> {
        let sql = r#"SELECT id, name, city, state, phone, image_link, genres,
                facebook_link, website, seeking_venue, seeking_description
            FROM artist
            WHERE id = $1"#;

        let result: Option<ArtistRow> =
            ArtistRow::find_by_statement(Statement::from_sql_and_values(
                DbBackend::Postgres,
                sql,
                vec![id.into()],
            ))
            .one(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;

        Ok(result.map(|row| row.into()))
    }

    async fn get_all(&self) -> Result<Vec<Artist>, QueryError> {
        let sql = r#"SELECT id, name, city, state, phone, image_link, genres,
                facebook_link, website, seeking_venue, seeking_description
            FROM artist
            ORDER BY id"#;

        let rows: Vec<ArtistRow> = ArtistRow::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            sql,
        ))
        .all(&self.db)
        .await
        .map_err(|e| QueryError::DbError(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.into()).collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Artist>, QueryError> {
        let sql = r#"SELECT id, name, city, state, phone, image_link, genres,
                facebook_link, website, seeking_venue, seeking_description
            FROM artist
            WHERE lower(name) LIKE lower($1)
            ORDER BY name"#;

        let rows: Vec<ArtistRow> = ArtistRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            vec![search_pattern(term).into()],
        ))
        .all(&self.db)
        .await
        .map_err(|e| QueryError::DbError(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.into()).collect())
    }
}
