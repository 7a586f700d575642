//! Per-kind store: create and point lookup over a shared backend.

use crate::config::{Payload, Record, ResourceKind};
use crate::error::{AppError, StoreError, StoreOp};
use crate::store::RecordStore;

/// Parse a path identifier. Empty input is a missing parameter; anything that is not
/// an integer is invalid. Neither reaches the store.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::MissingParameter("id"));
    }
    raw.parse().map_err(|_| AppError::InvalidParameter {
        name: "id",
        value: raw.to_string(),
    })
}

pub struct ResourceStore<'a> {
    kind: &'static ResourceKind,
    backend: &'a dyn RecordStore,
}

impl<'a> ResourceStore<'a> {
    pub fn new(kind: &'static ResourceKind, backend: &'a dyn RecordStore) -> Self {
        ResourceStore { kind, backend }
    }

    /// Insert one record built from `payload`. Store faults are surfaced as-is, never retried.
    pub async fn create(&self, payload: Payload) -> Result<Record, AppError> {
        if payload.kind() != self.kind {
            return Err(AppError::KindMismatch {
                expected: self.kind.name(),
                found: payload.kind().name(),
            });
        }
        self.backend
            .insert(&payload)
            .await
            .map_err(|source| self.persistence(StoreOp::Create, source))
    }

    /// Look up one record by its path identifier.
    pub async fn find_by_id(&self, raw_id: &str) -> Result<Record, AppError> {
        let id = parse_id(raw_id)?;
        match self.backend.find_by_id(self.kind, id).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(AppError::NotFound {
                label: self.kind.label,
                id,
            }),
            Err(source) => Err(self.persistence(StoreOp::Fetch, source)),
        }
    }

    fn persistence(&self, op: StoreOp, source: StoreError) -> AppError {
        AppError::Persistence {
            op,
            label: self.kind.label,
            source,
        }
    }
}
