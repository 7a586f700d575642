//! Numerical-method API: validated create and fetch-by-id for a fixed catalogue of
//! numerical-method parameter sets, persisted in PostgreSQL.

pub mod config;
pub mod error;
pub mod migration;
pub mod response;
pub mod sql;
pub mod state;
pub mod store;
pub mod service;
pub mod extractors;
pub mod handlers;
pub mod routes;

pub use config::{AppConfig, FieldType, FieldValue, Payload, Record, Registry, ResourceKind};
pub use error::{AppError, ConfigError, DecodeError, StoreError};
pub use migration::apply_migrations;
pub use response::ErrorResponse;
pub use state::AppState;
pub use store::{ensure_database_exists, MemoryRecordStore, PgRecordStore, RecordStore};
pub use routes::{build_router, common_routes_with_ready, docs_routes, resource_routes, API_PREFIX};
pub use service::{RequestValidator, ResourcePipeline, ResourceStore};
