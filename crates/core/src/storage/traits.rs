use async_trait::async_trait;

use super::{
    ContinuationToken, IndexQuery, KeyLookup, Page, Record, RecordUpdate, Result, ScanRequest,
};

/// Store collaborator used by every widget handler.
///
/// A store is bound to one table at construction. Implementations must be
/// safe to share across concurrent invocations without external locking.
#[async_trait]
pub trait WidgetStore: Send + Sync {
    /// Returns at most `lookup.limit` items whose primary key equals `lookup.value`.
    async fn get_by_key(&self, lookup: &KeyLookup) -> Result<Vec<Record>>;

    /// Returns one page of a secondary-index equality query.
    ///
    /// `start` is the continuation token of the previous page, if any.
    async fn query_index(
        &self,
        query: &IndexQuery,
        start: Option<ContinuationToken>,
    ) -> Result<Page>;

    /// Returns one page of a full-table scan.
    async fn scan(&self, request: &ScanRequest) -> Result<Page>;

    /// Sets the given attributes on the keyed item, creating it if absent.
    async fn upsert(&self, update: &RecordUpdate) -> Result<()>;
}
