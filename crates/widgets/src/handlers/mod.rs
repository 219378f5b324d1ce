//! Widget handlers.
//!
//! Each handler takes the shared [`WidgetContext`](crate::context::WidgetContext)
//! and a typed request, and returns a typed result or a `WidgetError`. They
//! know nothing about the transport; the Lambda and HTTP adapters call them.

mod boundary;
mod reports;
mod widget;

pub use reports::{filter_page, widgets_by_color};
pub use widget::{get_widget, put_widget};
