//! In-memory store implementation.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use widgets_core::storage::{
    ContinuationToken, IndexQuery, KeyLookup, Page, Record, RecordUpdate, Result, ScanRequest,
    StoreError, WidgetStore,
};

/// In-memory storage backend for testing and local development.
///
/// Records live in a `BTreeMap` keyed by primary-key value, wrapped in
/// `Arc<RwLock<_>>` for thread-safe access. Reads follow DynamoDB paging
/// rules: `limit` caps the items examined, filters run after the cap, and a
/// continuation is returned while examined items remain beyond the cap.
/// Data is not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    key_attr: String,
    records: Arc<RwLock<BTreeMap<String, Record>>>,
    calls: Arc<AtomicUsize>,
    fail_after: Option<usize>,
}

impl InMemoryStore {
    /// Creates an empty store whose primary key is `key_attr`.
    pub fn new(key_attr: impl Into<String>) -> Self {
        Self::from_records(key_attr, Vec::new())
    }

    /// Creates a store holding `records`. Records without the key attribute are skipped.
    pub fn from_records(
        key_attr: impl Into<String>,
        records: impl IntoIterator<Item = Record>,
    ) -> Self {
        let key_attr = key_attr.into();
        let records = records
            .into_iter()
            .filter_map(|record| Some((record.get(&key_attr)?.clone(), record)))
            .collect();

        Self {
            key_attr,
            records: Arc::new(RwLock::new(records)),
            calls: Arc::new(AtomicUsize::new(0)),
            fail_after: None,
        }
    }

    /// Fails every call after the first `successful_calls` with a connection error.
    pub fn with_failure_after(mut self, successful_calls: usize) -> Self {
        self.fail_after = Some(successful_calls);
        self
    }

    /// Number of store calls made so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshot of every record in key order.
    pub async fn records(&self) -> Vec<Record> {
        self.records.read().await.values().cloned().collect()
    }

    fn record_call(&self) -> Result<()> {
        let previous = self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_after {
            Some(limit) if previous >= limit => Err(StoreError::ConnectionFailed(format!(
                "injected fault on call {}",
                previous + 1
            ))),
            _ => Ok(()),
        }
    }

    /// Lower bound for a read that resumes after `start`.
    fn resume_bound(&self, start: Option<&ContinuationToken>) -> Bound<String> {
        match start.and_then(|token| token.get(&self.key_attr)) {
            Some(key) => Bound::Excluded(key.to_string()),
            None => Bound::Unbounded,
        }
    }

    fn token_for(&self, record: &Record, extra_attr: Option<&str>) -> ContinuationToken {
        let mut key = Record::new();
        for attr in std::iter::once(self.key_attr.as_str()).chain(extra_attr) {
            if let Some(value) = record.get(attr) {
                key.insert(attr.to_string(), value.clone());
            }
        }
        ContinuationToken::new(key)
    }
}

/// Reads at most `limit` items and reports whether more remain after them.
fn take_page<'a, I>(mut candidates: I, limit: u32) -> (Vec<&'a Record>, bool)
where
    I: Iterator<Item = &'a Record>,
{
    let examined: Vec<&Record> = candidates.by_ref().take(limit.max(1) as usize).collect();
    let has_more = candidates.next().is_some();
    (examined, has_more)
}

fn project(record: &Record, attrs: &[String]) -> Record {
    if attrs.is_empty() {
        return record.clone();
    }
    record
        .iter()
        .filter(|(name, _)| attrs.contains(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

#[async_trait]
impl WidgetStore for InMemoryStore {
    async fn get_by_key(&self, lookup: &KeyLookup) -> Result<Vec<Record>> {
        self.record_call()?;
        let records = self.records.read().await;

        Ok(records
            .values()
            .filter(|r| r.get(&lookup.key_attr) == Some(&lookup.value))
            .take(lookup.limit.max(1) as usize)
            .cloned()
            .collect())
    }

    async fn query_index(
        &self,
        query: &IndexQuery,
        start: Option<ContinuationToken>,
    ) -> Result<Page> {
        self.record_call()?;
        let records = self.records.read().await;

        let candidates = records
            .range((self.resume_bound(start.as_ref()), Bound::Unbounded))
            .map(|(_, record)| record)
            .filter(|r| r.get(&query.key_attr) == Some(&query.value));
        let (examined, has_more) = take_page(candidates, query.limit);

        let continuation = match examined.last() {
            Some(last) if has_more => Some(self.token_for(last, Some(query.key_attr.as_str()))),
            _ => None,
        };

        Ok(Page {
            items: examined.into_iter().cloned().collect(),
            continuation,
        })
    }

    async fn scan(&self, request: &ScanRequest) -> Result<Page> {
        self.record_call()?;
        let records = self.records.read().await;

        let candidates = records
            .range((
                self.resume_bound(request.exclusive_start.as_ref()),
                Bound::Unbounded,
            ))
            .map(|(_, record)| record);
        let (examined, has_more) = take_page(candidates, request.limit);

        let continuation = match examined.last() {
            Some(last) if has_more => Some(self.token_for(last, None)),
            _ => None,
        };

        let items = examined
            .into_iter()
            .filter(|r| match &request.filter {
                Some(filter) => r
                    .get(&filter.attr)
                    .is_some_and(|v| v.contains(filter.value.as_str())),
                None => true,
            })
            .map(|r| project(r, &request.projection))
            .collect();

        Ok(Page {
            items,
            continuation,
        })
    }

    async fn upsert(&self, update: &RecordUpdate) -> Result<()> {
        self.record_call()?;
        if update.key_attr != self.key_attr {
            return Err(StoreError::RequestFailed(format!(
                "Key attribute '{}' does not match table key '{}'",
                update.key_attr, self.key_attr
            )));
        }

        let mut records = self.records.write().await;
        let record = records
            .entry(update.key_value.clone())
            .or_insert_with(|| {
                Record::from([(update.key_attr.clone(), update.key_value.clone())])
            });
        for (attr, value) in &update.set {
            record.insert(attr.clone(), value.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, color: &str) -> Record {
        Record::from([
            ("pk".to_string(), name.to_string()),
            ("color".to_string(), color.to_string()),
        ])
    }

    fn store() -> InMemoryStore {
        InMemoryStore::from_records(
            "pk",
            vec![
                record("TEST001", "blue"),
                record("TEST002", "blue"),
                record("TEST003", "blue"),
                record("TEST004", "red"),
                record("FOO", "red"),
            ],
        )
    }

    fn color_query(color: &str, limit: u32) -> IndexQuery {
        IndexQuery {
            index_name: "color_idx".to_string(),
            key_attr: "color".to_string(),
            value: color.to_string(),
            limit,
        }
    }

    // ==================== Key lookup ====================

    #[tokio::test]
    async fn test_get_by_key() {
        let store = store();
        let lookup = KeyLookup {
            key_attr: "pk".to_string(),
            value: "TEST002".to_string(),
            limit: 1,
        };

        let records = store.get_by_key(&lookup).await.unwrap();
        assert_eq!(records, vec![record("TEST002", "blue")]);
    }

    #[tokio::test]
    async fn test_get_by_key_missing() {
        let lookup = KeyLookup {
            key_attr: "pk".to_string(),
            value: "NOPE".to_string(),
            limit: 1,
        };

        assert!(store().get_by_key(&lookup).await.unwrap().is_empty());
    }

    // ==================== Index query ====================

    #[tokio::test]
    async fn test_query_index_pages_until_exhausted() {
        let store = store();
        let query = color_query("blue", 1);

        let first = store.query_index(&query, None).await.unwrap();
        assert_eq!(first.items, vec![record("TEST001", "blue")]);
        let token = first.continuation.unwrap();
        assert_eq!(token.get("pk"), Some("TEST001"));
        assert_eq!(token.get("color"), Some("blue"));

        let second = store.query_index(&query, Some(token)).await.unwrap();
        assert_eq!(second.items, vec![record("TEST002", "blue")]);

        let third = store
            .query_index(&query, second.continuation)
            .await
            .unwrap();
        assert_eq!(third.items, vec![record("TEST003", "blue")]);
        assert!(third.continuation.is_none());
    }

    #[tokio::test]
    async fn test_query_index_single_page() {
        let page = store().query_index(&color_query("red", 10), None).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert!(page.continuation.is_none());
    }

    // ==================== Scan ====================

    #[tokio::test]
    async fn test_scan_caps_examined_items() {
        let page = store().scan(&ScanRequest::new(2)).await.unwrap();

        assert_eq!(page.items, vec![record("FOO", "red"), record("TEST001", "blue")]);
        assert_eq!(page.continuation.unwrap().get("pk"), Some("TEST001"));
    }

    #[tokio::test]
    async fn test_scan_filters_after_cap() {
        let request = ScanRequest::new(2).with_contains_filter("pk", "TEST");
        let page = store().scan(&request).await.unwrap();

        assert_eq!(page.items, vec![record("TEST001", "blue")]);
        assert!(page.continuation.is_some());
    }

    #[tokio::test]
    async fn test_scan_resumes_after_exclusive_start() {
        let request = ScanRequest::new(10)
            .with_exclusive_start(ContinuationToken::from_key("pk", "TEST002"));
        let page = store().scan(&request).await.unwrap();

        assert_eq!(page.items, vec![record("TEST003", "blue"), record("TEST004", "red")]);
        assert!(page.continuation.is_none());
    }

    #[tokio::test]
    async fn test_scan_applies_projection() {
        let store = InMemoryStore::from_records(
            "pk",
            vec![Record::from([
                ("pk".to_string(), "TEST001".to_string()),
                ("color".to_string(), "blue".to_string()),
                ("extra".to_string(), "x".to_string()),
            ])],
        );
        let request = ScanRequest::new(5).with_projection(["pk", "color"]);

        let page = store.scan(&request).await.unwrap();
        assert_eq!(page.items, vec![record("TEST001", "blue")]);
    }

    // ==================== Upsert ====================

    #[tokio::test]
    async fn test_upsert_creates_and_overwrites() {
        let store = InMemoryStore::new("pk");
        let update = RecordUpdate::from_record("pk", &record("Super Widget", "Red")).unwrap();
        store.upsert(&update).await.unwrap();

        let update = RecordUpdate::from_record("pk", &record("Super Widget", "Blue")).unwrap();
        store.upsert(&update).await.unwrap();

        assert_eq!(store.records().await, vec![record("Super Widget", "Blue")]);
    }

    #[tokio::test]
    async fn test_upsert_rejects_foreign_key_attribute() {
        let store = InMemoryStore::new("pk");
        let foreign = Record::from([
            ("PK".to_string(), "W".to_string()),
            ("color".to_string(), "Red".to_string()),
        ]);
        let update = RecordUpdate::from_record("PK", &foreign).unwrap();

        assert!(matches!(
            store.upsert(&update).await,
            Err(StoreError::RequestFailed(_))
        ));
    }

    // ==================== Fault injection ====================

    #[tokio::test]
    async fn test_failure_after_successful_calls() {
        let store = store().with_failure_after(1);
        let query = color_query("blue", 1);

        let first = store.query_index(&query, None).await.unwrap();
        let second = store.query_index(&query, first.continuation).await;

        assert!(matches!(second, Err(StoreError::ConnectionFailed(_))));
        assert_eq!(store.call_count(), 2);
    }
}
