mod schema;

pub mod clients;
pub mod models;
pub mod services;

pub use schema::schema;
pub use services::CategorySyncService;
