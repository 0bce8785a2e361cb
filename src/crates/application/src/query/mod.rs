use thiserror::Error;

pub mod dao;
pub mod dto;
pub mod get_artist;
pub mod get_artist_list;
pub mod get_show_list;
pub mod get_venue;
pub mod get_venue_list;
pub mod search_artists;
pub mod search_venues;
pub mod shared;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Execution error: {0}")]
    ExecutionError(String),
    #[error("Database error: {0}")]
    DbError(String),
}
