//! PostgreSQL backend: one parameterized statement per call over a shared pool.

use super::RecordStore;
use crate::config::{Payload, Record, ResourceKind};
use crate::error::StoreError;
use crate::sql::{bind_field, insert_returning, record_from_row, select_by_id};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        PgRecordStore { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert(&self, payload: &Payload) -> Result<Record, StoreError> {
        let kind = payload.kind();
        let sql = insert_returning(kind);
        tracing::debug!(sql = %sql, kind = %kind.name(), "insert");
        let mut query = sqlx::query(&sql);
        for value in payload.values() {
            query = bind_field(query, value);
        }
        let row = query.fetch_one(&self.pool).await?;
        record_from_row(kind, &row)
    }

    async fn find_by_id(&self, kind: &'static ResourceKind, id: i64) -> Result<Option<Record>, StoreError> {
        let sql = select_by_id(kind);
        tracing::debug!(sql = %sql, id, "select");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.map(|r| record_from_row(kind, &r)).transpose()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Connect to the `postgres` maintenance database and create the target database if missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let (admin_url, db_name) = split_database_url(database_url);
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)?;
    let mut conn = opts.connect().await?;
    let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE \"{}\"", db_name.replace('"', "\"\"")))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split `postgres://host/db?opts` into (`postgres://host/postgres?opts`, `db`).
fn split_database_url(url: &str) -> (String, String) {
    let Some(slash) = url.rfind('/') else {
        return (url.to_string(), String::new());
    };
    let (base, rest) = url.split_at(slash + 1);
    let (db_name, query) = match rest.split_once('?') {
        Some((db, q)) => (db, Some(q)),
        None => (rest, None),
    };
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    (admin_url, db_name.trim().to_string())
}
