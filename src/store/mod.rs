//! Record store backends. Every backend honours one contract: a single-row insert that
//! assigns the id, and a point lookup by id. No update or delete exists.

mod memory;
mod postgres;

pub use memory::MemoryRecordStore;
pub use postgres::{ensure_database_exists, PgRecordStore};

use crate::config::{Payload, Record, ResourceKind};
use crate::error::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist one validated payload. The store assigns a fresh id, unique within the kind.
    async fn insert(&self, payload: &Payload) -> Result<Record, StoreError>;

    /// Fetch one record of `kind`. `Ok(None)` when no row has that id.
    async fn find_by_id(&self, kind: &'static ResourceKind, id: i64) -> Result<Option<Record>, StoreError>;

    /// Cheap round-trip used by readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;
}
