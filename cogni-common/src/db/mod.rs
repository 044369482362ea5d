//! Database schema, models and stores

pub mod init;
pub mod models;
pub mod subject_configs;

pub use init::*;
pub use models::*;
