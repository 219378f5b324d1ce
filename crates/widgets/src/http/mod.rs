//! Axum adapters for the local dev server.

mod error;
mod health;
mod routes;

pub use error::AppError;
pub use health::livez;
pub use routes::{filter_page, get_widget, put_widget, widgets_by_color};
