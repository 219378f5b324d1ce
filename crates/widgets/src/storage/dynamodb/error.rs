//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `widgets_core::storage`.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use widgets_core::storage::StoreError;

/// Requests that never got a response are connection failures, whatever the operation.
fn map_transport_error<E, R>(err: &SdkError<E, R>, operation: &str) -> Option<StoreError>
where
    E: Error + 'static,
    R: Debug,
{
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => Some(
            StoreError::ConnectionFailed(format!("{operation} failed: {}", DisplayErrorContext(err))),
        ),
        _ => None,
    }
}

/// Map a Query SDK error to StoreError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(err: SdkError<QueryError, R>) -> StoreError {
    if let Some(transport) = map_transport_error(&err, "Query") {
        return transport;
    }

    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            StoreError::RequestFailed("Table or index not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            StoreError::Throttled("Throughput exceeded, please retry".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            StoreError::Throttled("Request limit exceeded, please retry".to_string())
        }
        QueryError::InternalServerError(_) => {
            StoreError::RequestFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::RequestFailed(format!("Query failed: {:?}", err)),
    }
}

/// Map a Scan SDK error to StoreError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(err: SdkError<ScanError, R>) -> StoreError {
    if let Some(transport) = map_transport_error(&err, "Scan") {
        return transport;
    }

    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => {
            StoreError::RequestFailed("Table not found".to_string())
        }
        ScanError::ProvisionedThroughputExceededException(_) => {
            StoreError::Throttled("Throughput exceeded, please retry".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            StoreError::Throttled("Request limit exceeded, please retry".to_string())
        }
        ScanError::InternalServerError(_) => {
            StoreError::RequestFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::RequestFailed(format!("Scan failed: {:?}", err)),
    }
}

/// Map an UpdateItem SDK error to StoreError.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    key: &str,
) -> StoreError {
    if let Some(transport) = map_transport_error(&err, "UpdateItem") {
        return transport;
    }

    match err.into_service_error() {
        UpdateItemError::ResourceNotFoundException(_) => {
            StoreError::RequestFailed("Table not found".to_string())
        }
        UpdateItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::Throttled("Throughput exceeded, please retry".to_string())
        }
        UpdateItemError::RequestLimitExceeded(_) => {
            StoreError::Throttled("Request limit exceeded, please retry".to_string())
        }
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::RequestFailed("Item collection size limit exceeded".to_string())
        }
        UpdateItemError::TransactionConflictException(_) => StoreError::RequestFailed(format!(
            "Transaction conflict on '{key}', please retry"
        )),
        UpdateItemError::InternalServerError(_) => {
            StoreError::RequestFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::RequestFailed(format!("UpdateItem failed: {:?}", err)),
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::types::error::{
        InternalServerError, ProvisionedThroughputExceededException, ResourceNotFoundException,
        TransactionConflictException,
    };

    use super::*;

    #[test]
    fn test_query_throughput_is_throttled() {
        let err = SdkError::service_error(
            QueryError::ProvisionedThroughputExceededException(
                ProvisionedThroughputExceededException::builder().build(),
            ),
            (),
        );

        assert!(matches!(map_query_error(err), StoreError::Throttled(_)));
    }

    #[test]
    fn test_query_missing_index() {
        let err = SdkError::service_error(
            QueryError::ResourceNotFoundException(ResourceNotFoundException::builder().build()),
            (),
        );

        assert_eq!(
            map_query_error(err),
            StoreError::RequestFailed("Table or index not found".to_string())
        );
    }

    #[test]
    fn test_scan_timeout_is_connection_failure() {
        let err: SdkError<ScanError, ()> = SdkError::timeout_error("read timed out");

        assert!(matches!(
            map_scan_error(err),
            StoreError::ConnectionFailed(msg) if msg.starts_with("Scan failed")
        ));
    }

    #[test]
    fn test_scan_internal_error() {
        let err = SdkError::service_error(
            ScanError::InternalServerError(InternalServerError::builder().build()),
            (),
        );

        assert_eq!(
            map_scan_error(err),
            StoreError::RequestFailed("DynamoDB internal server error".to_string())
        );
    }

    #[test]
    fn test_update_item_conflict_names_key() {
        let err = SdkError::service_error(
            UpdateItemError::TransactionConflictException(
                TransactionConflictException::builder().build(),
            ),
            (),
        );

        let mapped = map_update_item_error(err, "Super Widget");
        assert!(mapped.to_string().contains("Super Widget"));
    }
}
