//! The validated-create / fetch-by-id pipeline shared by every resource kind.
//!
//! Received -> Validating -> Rejected | Validated -> Persisting/Fetching -> Succeeded | Failed.
//! Each stage runs once, in order; nothing is retried.

use super::{RequestValidator, ResourceStore};
use crate::config::{Record, ResourceKind};
use crate::error::AppError;
use crate::store::RecordStore;

pub struct ResourcePipeline;

impl ResourcePipeline {
    /// Decode `body` as a payload of `kind`, then persist it. A body that fails to decode
    /// never reaches the store.
    pub async fn create(
        backend: &dyn RecordStore,
        kind: &'static ResourceKind,
        body: &[u8],
    ) -> Result<Record, AppError> {
        let name = kind.name();
        tracing::debug!(kind = %name, stage = "validating");
        let payload = match RequestValidator::decode(kind, body) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!(kind = %name, stage = "rejected", error = %e);
                return Err(e.into());
            }
        };
        tracing::debug!(kind = %name, stage = "persisting");
        let record = ResourceStore::new(kind, backend).create(payload).await?;
        tracing::info!(kind = %name, id = record.id(), "record created");
        Ok(record)
    }

    /// Resolve one record of `kind` by its raw path identifier.
    pub async fn fetch(
        backend: &dyn RecordStore,
        kind: &'static ResourceKind,
        raw_id: &str,
    ) -> Result<Record, AppError> {
        tracing::debug!(kind = %kind.name(), id = raw_id, stage = "fetching");
        ResourceStore::new(kind, backend).find_by_id(raw_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldValue, Payload, Registry};
    use crate::error::{StoreError, StoreOp};
    use crate::store::MemoryRecordStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and optionally fails every one of them.
    #[derive(Default)]
    struct ProbeStore {
        inner: MemoryRecordStore,
        calls: AtomicUsize,
        fail: bool,
    }

    impl ProbeStore {
        fn failing() -> Self {
            ProbeStore {
                fail: true,
                ..Default::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn hit(&self) -> Result<(), StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(StoreError::Unavailable("connection reset by peer".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl RecordStore for ProbeStore {
        async fn insert(&self, payload: &Payload) -> Result<Record, StoreError> {
            self.hit()?;
            self.inner.insert(payload).await
        }

        async fn find_by_id(&self, kind: &'static ResourceKind, id: i64) -> Result<Option<Record>, StoreError> {
            self.hit()?;
            self.inner.find_by_id(kind, id).await
        }

        async fn ping(&self) -> Result<(), StoreError> {
            self.hit()
        }
    }

    fn bisection() -> &'static ResourceKind {
        Registry::builtin()
            .unwrap()
            .resolve("root-of-equations", Some("bisection"))
            .unwrap()
    }

    const BISECTION_BODY: &[u8] = br#"{"equation":"x^2-4","xl":0,"xr":3,"e":0.001}"#;

    #[tokio::test]
    async fn create_then_fetch_round_trips() {
        let store = ProbeStore::default();
        let kind = bisection();
        let created = ResourcePipeline::create(&store, kind, BISECTION_BODY).await.unwrap();
        assert_eq!(created.id(), 1);
        assert_eq!(created.get("equation"), Some(&FieldValue::Text("x^2-4".into())));

        let fetched = ResourcePipeline::fetch(&store, kind, "1").await.unwrap();
        assert_eq!(fetched, created);
        let payload = RequestValidator::decode(kind, BISECTION_BODY).unwrap();
        assert!(fetched.matches(&payload));
    }

    #[tokio::test]
    async fn creates_receive_distinct_ids() {
        let store = ProbeStore::default();
        let kind = bisection();
        let mut ids = Vec::new();
        for _ in 0..5 {
            ids.push(ResourcePipeline::create(&store, kind, BISECTION_BODY).await.unwrap().id());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn invalid_body_never_reaches_store() {
        let store = ProbeStore::default();
        let err = ResourcePipeline::create(&store, bisection(), br#"{"equation":"x","xl":"zero","xr":3,"e":0.1}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
        assert_eq!(store.calls(), 0);
        assert_eq!(store.inner.count(bisection()), 0);
    }

    #[tokio::test]
    async fn missing_id_never_reaches_store() {
        let store = ProbeStore::default();
        let err = ResourcePipeline::fetch(&store, bisection(), "").await.unwrap_err();
        assert!(matches!(err, AppError::MissingParameter("id")));
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_not_persistence() {
        let store = ProbeStore::default();
        let err = ResourcePipeline::fetch(&store, bisection(), "999").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { label: "Bisection", id: 999 }));
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn store_faults_surface_as_persistence_errors() {
        let store = ProbeStore::failing();
        let err = ResourcePipeline::create(&store, bisection(), BISECTION_BODY).await.unwrap_err();
        assert!(matches!(err, AppError::Persistence { op: StoreOp::Create, .. }));

        let err = ResourcePipeline::fetch(&store, bisection(), "1").await.unwrap_err();
        assert!(matches!(err, AppError::Persistence { op: StoreOp::Fetch, .. }));
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn kinds_do_not_share_records() {
        let store = ProbeStore::default();
        let registry = Registry::builtin().unwrap();
        let false_position = registry.resolve("root-of-equations", Some("false-position")).unwrap();
        ResourcePipeline::create(&store, bisection(), BISECTION_BODY).await.unwrap();
        let err = ResourcePipeline::fetch(&store, false_position, "1").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn store_rejects_payload_of_another_kind() {
        let store = ProbeStore::default();
        let registry = Registry::builtin().unwrap();
        let false_position = registry.resolve("root-of-equations", Some("false-position")).unwrap();
        let payload = RequestValidator::decode(bisection(), BISECTION_BODY).unwrap();
        let err = ResourceStore::new(false_position, &store).create(payload).await.unwrap_err();
        assert!(matches!(err, AppError::KindMismatch { .. }));
        assert_eq!(store.calls(), 0);
    }
}
