use std::collections::HashMap;

/// A store-format item: attribute name to string value.
pub type Record = HashMap<String, String>;

/// Opaque resume position returned by a store query or scan.
///
/// Wraps the store's last-evaluated key. Handlers only pass it back to the
/// store, or read the primary-key value out of it for scan cursors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuationToken(Record);

impl ContinuationToken {
    /// Wraps a last-evaluated key.
    pub fn new(key: Record) -> Self {
        Self(key)
    }

    /// Builds a token that resumes after a single-attribute primary key.
    pub fn from_key(key_attr: &str, value: impl Into<String>) -> Self {
        Self(HashMap::from([(key_attr.to_string(), value.into())]))
    }

    /// Value of one attribute of the wrapped key.
    pub fn get(&self, attr: &str) -> Option<&str> {
        self.0.get(attr).map(String::as_str)
    }

    /// The wrapped key.
    pub fn as_record(&self) -> &Record {
        &self.0
    }
}

/// Key-equality lookup against the table's primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLookup {
    pub key_attr: String,
    pub value: String,
    pub limit: u32,
}

/// Equality query against a secondary index.
///
/// The same query is re-issued for every page; only the start position
/// changes between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexQuery {
    pub index_name: String,
    pub key_attr: String,
    pub value: String,
    pub limit: u32,
}

/// Substring-containment predicate evaluated by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsFilter {
    pub attr: String,
    pub value: String,
}

/// One page of a full-table scan.
///
/// `limit` caps the number of items the store examines. The optional filter
/// is applied to the examined items afterwards, so a filtered page may hold
/// fewer than `limit` items even when more matches exist further on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub limit: u32,
    pub projection: Vec<String>,
    pub filter: Option<ContainsFilter>,
    pub exclusive_start: Option<ContinuationToken>,
}

impl ScanRequest {
    /// Starts a scan request capped at `limit` examined items.
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            projection: Vec::new(),
            filter: None,
            exclusive_start: None,
        }
    }

    /// Restricts the returned attributes.
    pub fn with_projection<I, S>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projection = attrs.into_iter().map(Into::into).collect();
        self
    }

    /// Keeps only items whose `attr` contains `value`.
    pub fn with_contains_filter(mut self, attr: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter = Some(ContainsFilter {
            attr: attr.into(),
            value: value.into(),
        });
        self
    }

    /// Resumes strictly after `start`.
    pub fn with_exclusive_start(mut self, start: ContinuationToken) -> Self {
        self.exclusive_start = Some(start);
        self
    }
}

/// Unconditional attribute-level update; creates the item if absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUpdate {
    pub key_attr: String,
    pub key_value: String,
    /// Attributes to `SET`, in order.
    pub set: Vec<(String, String)>,
}

impl RecordUpdate {
    /// Splits a record into its key and the attributes to set.
    ///
    /// Returns `None` when the record lacks the key attribute.
    pub fn from_record(key_attr: &str, record: &Record) -> Option<Self> {
        let key_value = record.get(key_attr)?.clone();
        let mut set: Vec<(String, String)> = record
            .iter()
            .filter(|(name, _)| name.as_str() != key_attr)
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        set.sort();

        Some(Self {
            key_attr: key_attr.to_string(),
            key_value,
            set,
        })
    }
}

/// Items returned by one store call and where the next call should resume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<Record>,
    pub continuation: Option<ContinuationToken>,
}
