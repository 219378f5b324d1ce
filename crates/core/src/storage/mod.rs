mod error;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use traits::WidgetStore;
pub use types::{
    ContainsFilter, ContinuationToken, IndexQuery, KeyLookup, Page, Record, RecordUpdate,
    ScanRequest,
};
