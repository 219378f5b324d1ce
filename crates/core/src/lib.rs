//! Functional core for the widget handlers.
//!
//! Everything in this crate is pure: wire types, validation, the error
//! taxonomy and its status mapping, environment configuration with the
//! widget/record mapping, and the store contract the shell implements.

pub mod env;
pub mod serde;
pub mod storage;
pub mod widget;
