//! Widget store handlers.
//!
//! The handlers in [`handlers`] are transport-agnostic. They are exposed as
//! AWS Lambda functions (see `src/bin/`) through [`lambda`], and as a local
//! axum dev server through [`app`] and [`http`].

pub mod app;
pub mod context;
pub mod handlers;
pub mod http;
pub mod lambda;
#[cfg(feature = "inmemory")]
pub mod mock_data;
pub mod storage;
