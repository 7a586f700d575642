//! In-process backend with per-table monotonic ids starting at 1.

use super::RecordStore;
use crate::config::{FieldValue, Payload, Record, ResourceKind};
use crate::error::StoreError;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Vec<FieldValue>>,
}

#[derive(Default)]
pub struct MemoryRecordStore {
    tables: RwLock<HashMap<&'static str, Table>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows stored for `kind`.
    pub fn count(&self, kind: &ResourceKind) -> usize {
        self.tables
            .read()
            .map(|t| t.get(kind.table).map_or(0, |table| table.rows.len()))
            .unwrap_or(0)
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".into())
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn insert(&self, payload: &Payload) -> Result<Record, StoreError> {
        let kind = payload.kind();
        let mut tables = self.tables.write().map_err(poisoned)?;
        let table = tables.entry(kind.table).or_default();
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, payload.values().to_vec());
        Ok(Record::from_payload(id, payload.clone()))
    }

    async fn find_by_id(&self, kind: &'static ResourceKind, id: i64) -> Result<Option<Record>, StoreError> {
        let tables = self.tables.read().map_err(poisoned)?;
        Ok(tables
            .get(kind.table)
            .and_then(|table| table.rows.get(&id))
            .map(|values| Record::new(id, kind, values.clone())))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
