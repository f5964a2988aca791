mod operation;
mod runner;
mod schema;

pub use operation::Operation;
pub use runner::Connector;
pub use schema::{ColumnType, TableSchema};
