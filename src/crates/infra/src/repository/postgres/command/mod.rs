pub mod artist;
pub mod db_data;
pub mod show;
pub mod venue;
