pub mod app_config;
pub mod checkin_repo;
pub mod database;

pub use checkin_repo::PostgresCheckinRepository;
pub use database::{DbClient, StoreError};
