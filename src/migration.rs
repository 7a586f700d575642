//! Create the backing table of every registered kind. Invoked explicitly, never per request.

use crate::config::Registry;
use crate::error::StoreError;
use crate::sql::create_table;
use sqlx::PgPool;

/// Idempotent: tables are created with IF NOT EXISTS and existing rows are untouched.
pub async fn apply_migrations(pool: &PgPool, registry: &Registry) -> Result<(), StoreError> {
    for kind in registry.kinds() {
        let ddl = create_table(kind);
        tracing::debug!(sql = %ddl, "migrate");
        sqlx::query(&ddl).execute(pool).await?;
        tracing::info!(table = kind.table, kind = %kind.name(), "table ready");
    }
    Ok(())
}
