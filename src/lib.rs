//! Connector that syncs the FRED economic-data category taxonomy into a
//! destination table through a host-provided connector harness.
//!
//! Two entry points make up the whole contract: [`schema`] declares the
//! single `fred_categories` table, and [`CategorySyncService::update`]
//! performs one full-refresh sync run, producing upsert operations in API
//! order followed by a single checkpoint.

pub mod connector;
pub mod core;
pub mod features;
pub mod shared;

pub use crate::connector::{ColumnType, Connector, Operation, TableSchema};
pub use crate::core::config::Configuration;
pub use crate::core::error::{ConnectorError, Result};
pub use crate::features::categories::clients::FredClient;
pub use crate::features::categories::{schema, CategorySyncService};
