mod error;
mod http_mapping;
mod requests;
mod responses;
mod types;
pub mod validation;

pub use error::{Result, WidgetError};
pub use http_mapping::{widget_error_body, widget_error_to_status_code};
pub use requests::{ColorQueryRequest, FilterPageRequest, GetWidgetRequest, PutWidgetRequest};
pub use responses::{ErrorBody, FilterPageResponse, PageMetadata, PAGE_OK_MESSAGE};
pub use types::Widget;
