pub mod artist;
pub mod show;
pub mod venue;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Database error: {0}")]
    DbErr(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
