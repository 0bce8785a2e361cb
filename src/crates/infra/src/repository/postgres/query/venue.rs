use super::search_pattern;
use application::query::dao::VenueDao;
use application::query::QueryError;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use model::venue::{Venue, VenueSummary};
use sea_orm::*;

pub struct VenueDaoImpl {
    db: DatabaseConnection,
}

impl VenueDaoImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, Clone, FromQueryResult)]
struct VenueRow {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl From<VenueRow> for Venue {
    fn from(row: VenueRow) -> Self {
        Venue {
            id: row.id,
            name: row.name,
            city: row.city,
            state: row.state,
            address: row.address,
            phone: row.phone,
            image_link: row.image_link,
            genres: row.genres,
            facebook_link: row.facebook_link,
            website: row.website,
            seeking_talent: row.seeking_talent,
            seeking_description: row.seeking_description,
        }
    }
}

/// 列表行：即将演出数在 SQL 侧聚合
#[derive(Debug, Clone, FromQueryResult)]
struct VenueSummaryRow {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub upcoming_show_count: i64,
}

#[async_trait]
impl VenueDao for VenueDaoImpl {
    async fn get_by_id(&self, id: i64) -> Result<Option<Venue>, QueryError> {
        let sql = r#"SELECT id, name, city, state, address, phone, image_link, genres,
                facebook_link, website, seeking_talent, seeking_description
            FROM venue
            WHERE id = $1"#;

        let result: Option<VenueRow> =
            VenueRow::find_by_statement(Statement::from_sql_and_values(
                DbBackend::Postgres,
                sql,
                vec![id.into()],
            ))
            .one(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;

        Ok(result.map(|row| row.into()))
    }

    async fn get_all(&self, now: NaiveDateTime) -> Result<Vec<VenueSummary>, QueryError> {
        // 严格大于：恰好等于 now 的演出不计入即将
        let sql = r#"SELECT v.id, v.name, v.city, v.state,
                COUNT(s.id) FILTER (WHERE s.start_time > $1) AS upcoming_show_count
            FROM venue v
            LEFT JOIN "show" s ON s.venue_id = v.id
            GROUP BY v.id, v.name, v.city, v.state
            ORDER BY v.city, v.state, v.id"#;

        let rows: Vec<VenueSummaryRow> =
            VenueSummaryRow::find_by_statement(Statement::from_sql_and_values(
                DbBackend::Postgres,
                sql,
                vec![now.into()],
            ))
            .all(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| VenueSummary {
                id: row.id,
                name: row.name,
                city: row.city,
                state: row.state,
                upcoming_show_count: row.upcoming_show_count,
            })
            .collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Venue>, QueryError> {
        let sql = r#"SELECT id, name, city, state, address, phone, image_link, genres,
                facebook_link, website, seeking_talent, seeking_description
            FROM venue
            WHERE lower(name) LIKE lower($1)
            ORDER BY name"#;

        let rows: Vec<VenueRow> = VenueRow::find_by_statement(Statement::from_sql_and_values(
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
